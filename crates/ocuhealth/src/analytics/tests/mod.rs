mod action_plan;
mod common;
