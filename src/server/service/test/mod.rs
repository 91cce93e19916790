use crate::server::error::AppError;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
