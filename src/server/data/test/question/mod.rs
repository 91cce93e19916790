use crate::server::{data::question::QuestionRepository, model::question::CreateQuestionParams};
use sea_orm::{DbErr, EntityTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod search;
