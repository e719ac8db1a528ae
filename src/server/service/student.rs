use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::AuthContext,
        student::{CreateStudentParams, Student, UpdateStudentParams},
    },
    util::validate::{has_min_chars, is_valid_email},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student owned by the caller's gym.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(AppError::BadRequest)` - Field validation failed
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn create(
        &self,
        ctx: AuthContext,
        params: CreateStudentParams,
    ) -> Result<Student, AppError> {
        validate_fields(
            Some(&params.name),
            Some(&params.email),
            Some(params.age),
            Some(params.weight),
            Some(&params.height),
        )?;

        let repo = StudentRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email already in use".to_string()));
        }

        repo.create(ctx.gym_id, params).await.map_err(Into::into)
    }

    /// Gets all students of the caller's gym.
    pub async fn get_by_gym(&self, ctx: AuthContext) -> Result<Vec<Student>, AppError> {
        StudentRepository::new(self.db)
            .get_by_gym(ctx.gym_id)
            .await
            .map_err(Into::into)
    }

    /// Gets a single student. A student of another gym is reported as absent,
    /// so reads cannot be used to probe other gyms' ids.
    pub async fn get(&self, ctx: AuthContext, id: i32) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|s| s.gym_id == ctx.gym_id)
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        Ok(student)
    }

    /// Updates a student of the caller's gym. Only supplied fields are
    /// validated and changed.
    ///
    /// # Returns
    /// - `Ok(Student)` - The updated student
    /// - `Err(AppError::NotFound)` - No student with that id
    /// - `Err(AppError::AuthErr)` - Student belongs to another gym
    /// - `Err(AppError::Conflict)` - Email held by a different student
    pub async fn update(
        &self,
        ctx: AuthContext,
        id: i32,
        params: UpdateStudentParams,
    ) -> Result<Student, AppError> {
        validate_fields(
            params.name.as_deref(),
            params.email.as_deref(),
            params.age,
            params.weight,
            params.height.as_deref(),
        )?;

        let repo = StudentRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if existing.gym_id != ctx.gym_id {
            return Err(
                AuthError::GymAccessDenied("Student belongs to another gym".to_string()).into(),
            );
        }

        if let Some(email) = &params.email {
            // Keeping the student's own email is fine; taking another's is not.
            if let Some(holder) = repo.find_by_email(email).await? {
                if holder.id != id {
                    return Err(AppError::Conflict("Email already in use".to_string()));
                }
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Deletes a student of the caller's gym.
    pub async fn delete(&self, ctx: AuthContext, id: i32) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if existing.gym_id != ctx.gym_id {
            return Err(
                AuthError::GymAccessDenied("Student belongs to another gym".to_string()).into(),
            );
        }

        repo.delete(id).await?;

        Ok(())
    }
}

/// Validates whichever student fields are present. Create passes everything,
/// update only what the caller supplied.
fn validate_fields(
    name: Option<&str>,
    email: Option<&str>,
    age: Option<i32>,
    weight: Option<f64>,
    height: Option<&str>,
) -> Result<(), AppError> {
    if let Some(name) = name {
        if !has_min_chars(name, 3) {
            return Err(AppError::BadRequest(
                "Name must be at least 3 characters".to_string(),
            ));
        }
    }
    if let Some(email) = email {
        if !is_valid_email(email) {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
    }
    if let Some(age) = age {
        if age < 1 {
            return Err(AppError::BadRequest("Age must be at least 1".to_string()));
        }
    }
    if let Some(weight) = weight {
        if weight < 1.0 {
            return Err(AppError::BadRequest("Weight must be at least 1".to_string()));
        }
    }
    if let Some(height) = height {
        if height.is_empty() {
            return Err(AppError::BadRequest("Height must not be empty".to_string()));
        }
    }

    Ok(())
}
