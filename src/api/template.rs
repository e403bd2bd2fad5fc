/// Wrap the user's request in the prompt-engineering instructions sent to the model
pub fn instruction_prompt(request: &str) -> String {
    format!(
        r#"You are an expert prompt engineer. Based on the user's request, create a structured JSON prompt template that can be used to instruct another AI model effectively.

The JSON should contain the following fields:
- "task": A clear, concise description of what the AI should do
- "system_prompt": The system instructions for the AI (role, behavior, constraints)
- "user_prompt": The actual prompt to send to the AI (this should be detailed and well-crafted)
- "context": Any relevant background information or context
- "output_format": Expected output format (e.g., "markdown", "json", "plain text", "code")
- "constraints": Array of rules or limitations the AI should follow
- "examples": Optional array of example inputs/outputs if helpful
- "temperature": Suggested temperature setting (0.0-1.0)
- "max_tokens": Suggested max tokens for response

Make this prompt template professional, detailed, and optimized for the best AI response.
Output ONLY the valid JSON object, no additional text or markdown code blocks.

User's Request: "{}""#,
        request
    )
}
