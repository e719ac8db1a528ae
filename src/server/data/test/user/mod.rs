use crate::server::{
    data::user::UserRepository,
    model::user::{InsertUserParams, UpdateUserRecord},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials;
mod get_by_gym;
mod update;
