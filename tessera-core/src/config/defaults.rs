//! Named defaults for every tunable in the pipeline configuration.
//!
//! The scoring weights and thresholds are empirical constants carried over
//! from production use. They have not been calibrated against a labeled
//! relevance set.

// Expansion
pub const DEFAULT_MAX_VARIANTS: usize = 5;

// Retrieval
pub const DEFAULT_TOP_K: usize = 8;

// Scoring
pub const DEFAULT_EXACT_MATCH_BONUS: f64 = 10.0;
pub const DEFAULT_IDENTITY_BONUS: f64 = 5.0;
pub const DEFAULT_OVERLAP_WEIGHT: f64 = 2.0;
pub const DEFAULT_CONCISE_BONUS: f64 = 2.0;
pub const DEFAULT_CONCISE_THRESHOLD: usize = 500;
pub const DEFAULT_SUBJECT_BOOST: f64 = 3.0;

// Context assembly
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 2000;

// Embeddings
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "rest";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/sentence-transformers/all-MiniLM-L6-v2";
pub const DEFAULT_EMBEDDING_API_KEY_ENV: &str = "TESSERA_EMBED_API_KEY";
pub const DEFAULT_L1_CACHE_SIZE: u64 = 1024;

// Index
pub const DEFAULT_INDEX_URL: &str = "http://localhost:6333";
pub const DEFAULT_INDEX_COLLECTION: &str = "tessera";
pub const DEFAULT_INDEX_API_KEY_ENV: &str = "TESSERA_INDEX_API_KEY";

// Generation
pub const DEFAULT_GENERATION_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GENERATION_API_KEY_ENV: &str = "TESSERA_CHAT_API_KEY";
pub const DEFAULT_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_MAX_TOKENS: u32 = 800;
pub const DEFAULT_REFUSAL: &str =
    "I don't have sufficient information about this topic in the provided context.";
pub const DEFAULT_ERROR_PREFIX: &str = "Error generating response";
pub const DEFAULT_PROMPT_FOR_INPUT: &str = "Please enter a question.";
