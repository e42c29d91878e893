//! Prompt construction for grounded answering.
//!
//! The assembled context is embedded verbatim, the generator is bound to
//! it, and the fixed refusal string is spelled out in the instructions.

/// System prompt framing the generator as a context-bound assistant.
pub const SYSTEM_PROMPT: &str =
    "You are a knowledgeable assistant that provides accurate, well-structured \
     answers based strictly on the provided context.";

/// Build the user prompt: context verbatim, grounding rules, the fixed
/// refusal instruction, and the raw question.
pub fn user_prompt(question: &str, context: &str, refusal: &str) -> String {
    format!(
        "CONTEXT (with relevance scores):\n\
         {context}\n\
         \n\
         QUESTION: {question}\n\
         \n\
         INSTRUCTIONS:\n\
         1. Use ONLY the provided context to answer the question.\n\
         2. If the context contains relevant information, provide a clear, well-structured answer.\n\
         3. If multiple pieces of information are relevant, synthesize them coherently.\n\
         4. If the context does not contain enough information, respond with: \"{refusal}\"\n\
         5. Be specific and factual; do not add outside knowledge.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_context_and_question_verbatim() {
        let prompt = user_prompt(
            "who is ada?",
            "[score: 12.0] ada lovelace wrote the first program",
            "I don't know.",
        );
        assert!(prompt.contains("[score: 12.0] ada lovelace wrote the first program"));
        assert!(prompt.contains("QUESTION: who is ada?"));
    }

    #[test]
    fn spells_out_the_refusal_string() {
        let prompt = user_prompt("q", "c", "No answer available.");
        assert!(prompt.contains("\"No answer available.\""));
    }
}
