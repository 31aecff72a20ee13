// Cross-cutting prompt fragments shared by every caller of the model.
// Task-specific prompts live next to the module that owns the task.

/// Closing directive appended to every prompt that expects structured output.
pub const JSON_ONLY_DIRECTIVE: &str = "Return only valid JSON, no markdown, no code blocks.";
