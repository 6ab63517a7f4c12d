/// Executable invoked when no other command is configured
pub const DEFAULT_LLM_COMMAND: &str = "llm";

/// Model passed to the `llm` CLI via `-m`
pub const DEFAULT_MODEL: &str = "claude-haiku-4.5";

/// System prompt sent with every tool
pub const DEFAULT_SYSTEM_PROMPT: &str = "Write a one-sentence description for this tool.
Do not use words like \"just\" or \"simply\".
Do not start with \"This tool\" or \"This is\".
Start directly with what the tool does.
Be concise and clear.";
