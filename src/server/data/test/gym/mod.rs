use crate::server::{
    data::gym::GymRepository,
    model::gym::{CreateGymParams, UpdateGymParams},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod delete;
mod update;
