// Stylist core: heuristic scoring, model gateway, reply interpretation and
// the batch annotation pipeline. The HTTP shell lives in `handlers`.

pub mod gateway;
pub mod handlers;
pub mod heuristic;
pub mod interpreter;
pub mod models;
pub mod pipeline;
pub mod prompts;
