/**
 * Admin Bootstrap
 *
 * At startup the account named by `ADMIN_USERNAME` is brought in line with
 * `ADMIN_PASSWORD`: created if missing, or given the admin role and the
 * configured password if either has drifted. Nothing happens when the
 * credentials are not configured.
 */

use crate::backend::auth::users::{hash_password, verify_password, User};
use crate::backend::error::BackendError;
use crate::backend::store::JsonStore;
use crate::shared::{AdminCredentials, Role};

/// What the bootstrap did to the admin account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminBootstrap {
    /// No admin credentials configured
    Skipped,
    Created,
    /// Existing account had the wrong role or password and was corrected
    Updated,
    Unchanged,
}

/// Ensure the configured admin account exists with the configured password
pub async fn ensure_admin(
    users: &JsonStore<User>,
    admin: Option<&AdminCredentials>,
    bcrypt_cost: u32,
) -> Result<AdminBootstrap, BackendError> {
    let Some(admin) = admin else {
        tracing::warn!("ADMIN_USERNAME or ADMIN_PASSWORD not set, skipping admin bootstrap");
        return Ok(AdminBootstrap::Skipped);
    };

    let password_hash = hash_password(&admin.password, bcrypt_cost)?;

    let outcome = users
        .update(|records: &mut Vec<User>| -> Result<AdminBootstrap, BackendError> {
            match records.iter_mut().find(|u| u.username == admin.username) {
                Some(existing) => {
                    let password_matches = verify_password(&admin.password, &existing.password_hash)?;
                    if password_matches && existing.role == Role::Admin {
                        return Ok(AdminBootstrap::Unchanged);
                    }
                    existing.password_hash = password_hash;
                    existing.role = Role::Admin;
                    Ok(AdminBootstrap::Updated)
                }
                None => {
                    records.push(User {
                        id: uuid::Uuid::new_v4().to_string(),
                        username: admin.username.clone(),
                        password_hash,
                        role: Role::Admin,
                    });
                    Ok(AdminBootstrap::Created)
                }
            }
        })
        .await?;

    match outcome {
        AdminBootstrap::Created => tracing::info!("Admin user '{}' created", admin.username),
        AdminBootstrap::Updated => {
            tracing::info!("Admin user '{}' password or role updated", admin.username)
        }
        _ => tracing::info!("Admin user '{}' already up to date", admin.username),
    }

    Ok(outcome)
}
