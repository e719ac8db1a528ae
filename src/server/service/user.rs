use sea_orm::DatabaseConnection;

use crate::server::{
    data::{gym::GymRepository, user::UserRepository},
    error::AppError,
    model::{
        auth::AuthContext,
        user::{InsertUserParams, RegisterUserParams, UpdateUserParams, UpdateUserRecord, User},
    },
    util::validate::{has_min_chars, is_valid_email},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a staff account for an existing gym.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Invalid name, email, or password
    /// - `Err(AppError::NotFound)` - Gym does not exist
    /// - `Err(AppError::Conflict)` - Email already in use
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        if !has_min_chars(&params.name, 3) {
            return Err(AppError::BadRequest(
                "Name must be at least 3 characters".to_string(),
            ));
        }
        if !is_valid_email(&params.email) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if !has_min_chars(&params.password, 6) {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        if GymRepository::new(self.db)
            .find_by_id(params.gym_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Gym not found".to_string()));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email already in use".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        repo.create(InsertUserParams {
            name: params.name,
            email: params.email,
            password_hash,
            gym_id: params.gym_id,
        })
        .await
        .map_err(Into::into)
    }

    /// Gets all staff of the caller's gym.
    pub async fn get_by_gym(&self, ctx: AuthContext) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db)
            .get_by_gym(ctx.gym_id)
            .await
            .map_err(Into::into)
    }

    /// Updates the caller's own account. Only supplied fields are validated
    /// and changed; a new password is rehashed before storage.
    pub async fn update_self(
        &self,
        ctx: AuthContext,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        if let Some(name) = &params.name {
            if !has_min_chars(name, 3) {
                return Err(AppError::BadRequest(
                    "Name must be at least 3 characters".to_string(),
                ));
            }
        }
        if let Some(password) = &params.password {
            if !has_min_chars(password, 6) {
                return Err(AppError::BadRequest(
                    "Password must be at least 6 characters".to_string(),
                ));
            }
        }

        let repo = UserRepository::new(self.db);

        if let Some(email) = &params.email {
            if !is_valid_email(email) {
                return Err(AppError::BadRequest("Invalid email address".to_string()));
            }

            // Keeping one's own email is fine; taking another user's is not.
            if let Some(holder) = repo.find_by_email(email).await? {
                if holder.id != ctx.user_id {
                    return Err(AppError::Conflict("Email already in use".to_string()));
                }
            }
        }

        let password_hash = params.password.as_deref().map(hash_password).transpose()?;

        repo.update(
            ctx.user_id,
            UpdateUserRecord {
                name: params.name,
                email: params.email,
                password_hash,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::*;
    use test_utils::{builder::TestBuilder, factory};

    fn register_params(email: &str, gym_id: i32) -> RegisterUserParams {
        RegisterUserParams {
            name: "Front Desk".to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
            gym_id,
        }
    }

    #[tokio::test]
    async fn register_rejects_unknown_gym() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(Gym)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = UserService::new(db)
            .register(register_params("desk@example.com", 999))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(Gym)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let gym = factory::gym::create_gym(db).await?;
        let existing = factory::user::create_user(db, gym.id).await?;

        let result = UserService::new(db)
            .register(register_params(&existing.email, gym.id))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_short_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(Gym)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let gym = factory::gym::create_gym(db).await?;
        let mut params = register_params("desk@example.com", gym.id);
        params.password = "short".to_string();

        let result = UserService::new(db).register(params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn register_counts_password_characters_not_bytes() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(Gym)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let gym = factory::gym::create_gym(db).await?;
        let mut params = register_params("desk@example.com", gym.id);
        // Five characters but ten bytes; still below the six-character minimum.
        params.password = "ééééé".to_string();

        let result = UserService::new(db).register(params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn update_self_keeping_own_email_succeeds() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(Gym)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let gym = factory::gym::create_gym(db).await?;
        let user = factory::user::create_user(db, gym.id).await?;
        let ctx = AuthContext {
            user_id: user.id,
            gym_id: gym.id,
        };

        let updated = UserService::new(db)
            .update_self(
                ctx,
                UpdateUserParams {
                    name: Some("Renamed Staff".to_string()),
                    email: Some(user.email.clone()),
                    password: None,
                },
            )
            .await?;

        assert_eq!(updated.name, "Renamed Staff");
        assert_eq!(updated.email, user.email);

        Ok(())
    }

    #[tokio::test]
    async fn update_self_taking_another_users_email_conflicts() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(Gym)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let gym = factory::gym::create_gym(db).await?;
        let user = factory::user::create_user(db, gym.id).await?;
        let other = factory::user::create_user(db, gym.id).await?;
        let ctx = AuthContext {
            user_id: user.id,
            gym_id: gym.id,
        };

        let result = UserService::new(db)
            .update_self(
                ctx,
                UpdateUserParams {
                    name: None,
                    email: Some(other.email),
                    password: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    #[tokio::test]
    async fn get_by_gym_excludes_other_gyms_staff() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(Gym)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let gym = factory::gym::create_gym(db).await?;
        let other_gym = factory::gym::create_gym(db).await?;
        let user = factory::user::create_user(db, gym.id).await?;
        factory::user::create_user(db, other_gym.id).await?;

        let staff = UserService::new(db)
            .get_by_gym(AuthContext {
                user_id: user.id,
                gym_id: gym.id,
            })
            .await?;

        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].id, user.id);

        Ok(())
    }
}
