//! AnswerPipeline — sequences expansion, retrieval, ranking, assembly,
//! and generation for one request.
//!
//! The pipeline is constructed once by the hosting process and injected
//! into request handlers; collaborators come in through the core traits.
//! `answer` always returns a string: every failure mode resolves to a
//! configured response or a formatted error answer.

use tessera_core::config::TesseraConfig;
use tessera_core::errors::{ConfigError, TesseraResult};
use tessera_core::models::{DegradationEvent, RetrievalReport};
use tessera_core::traits::{IGenerator, IVectorIndex, SamplingParams};
use tessera_embeddings::EmbeddingEngine;
use tessera_retrieval::context::ContextAssembler;
use tessera_retrieval::expansion::QueryExpander;
use tessera_retrieval::ranking::{dedup, reranker, scorer};
use tessera_retrieval::retriever::Retriever;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Stages a request moves through, in order. `NoContext` is the terminal
/// short-circuit taken when deduplication leaves nothing to ground an
/// answer on; the generator is never invoked on that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Expanding,
    EmbeddingRetrieving,
    Deduping,
    Scoring,
    Assembling,
    Generating,
    Done,
    NoContext,
}

/// The answer pipeline. One instance serves many requests; all per-request
/// state lives on the stack of `answer`.
pub struct AnswerPipeline<'a> {
    expander: QueryExpander,
    retriever: Retriever,
    assembler: ContextAssembler,
    config: TesseraConfig,
    embedder: EmbeddingEngine,
    index: &'a dyn IVectorIndex,
    generator: &'a dyn IGenerator,
    last_report: Option<RetrievalReport>,
}

impl<'a> AnswerPipeline<'a> {
    /// Construct the pipeline, validating cross-component configuration.
    ///
    /// A dimensionality mismatch between the embedding provider and the
    /// index is a hard startup error; it can never be recovered
    /// per-request.
    pub fn new(
        config: TesseraConfig,
        index: &'a dyn IVectorIndex,
        generator: &'a dyn IGenerator,
    ) -> TesseraResult<Self> {
        let embedder = EmbeddingEngine::new(&config.embedding);
        if embedder.dimensions() != index.dimensions() {
            return Err(ConfigError::DimensionMismatch {
                provider: embedder.dimensions(),
                index: index.dimensions(),
            }
            .into());
        }

        Ok(Self {
            expander: QueryExpander::new(config.expansion.clone()),
            retriever: Retriever::new(config.retrieval.top_k),
            assembler: ContextAssembler::new(config.context.clone()),
            config,
            embedder,
            index,
            generator,
            last_report: None,
        })
    }

    /// Answer a question. Always returns a string; never panics and never
    /// propagates an error past this boundary.
    pub fn answer(&mut self, question: &str) -> String {
        let request_id = Uuid::new_v4();

        if question.trim().is_empty() {
            debug!(%request_id, "degenerate input rejected before expansion");
            return self.config.generation.prompt_for_input.clone();
        }

        self.transition(request_id, PipelineStage::Expanding);
        let variants = self.expander.expand(question);
        let normalized = variants.first().cloned().unwrap_or_default();
        if normalized.is_empty() {
            // Punctuation-only input survives the whitespace guard but
            // normalizes to the degenerate empty variant.
            debug!(%request_id, "query normalized to empty, prompting for input");
            return self.config.generation.prompt_for_input.clone();
        }

        self.transition(request_id, PipelineStage::EmbeddingRetrieving);
        let outcome = self
            .retriever
            .retrieve(&mut self.embedder, self.index, &variants);
        let raw_hits = outcome.candidates.len();

        self.transition(request_id, PipelineStage::Deduping);
        let unique = dedup::dedupe(outcome.candidates);

        self.last_report = Some(RetrievalReport {
            variants_issued: variants.len(),
            variants_failed: outcome.failures.len(),
            raw_hits,
            deduped: unique.len(),
            failures: outcome.failures,
        });

        if unique.is_empty() {
            self.transition(request_id, PipelineStage::NoContext);
            info!(%request_id, "no candidates after dedup, refusing without generation");
            return self.config.generation.refusal.clone();
        }

        self.transition(request_id, PipelineStage::Scoring);
        let scored = scorer::score(&normalized, &unique, &self.config.scoring);
        let ranked = reranker::rerank(scored, &self.config.scoring);

        self.transition(request_id, PipelineStage::Assembling);
        let context = self.assembler.assemble(&ranked);

        self.transition(request_id, PipelineStage::Generating);
        let params = SamplingParams {
            temperature: self.config.generation.temperature,
            max_tokens: self.config.generation.max_tokens,
        };
        let user = crate::prompt::user_prompt(question, &context, &self.config.generation.refusal);
        let answer = match self
            .generator
            .complete(crate::prompt::SYSTEM_PROMPT, &user, &params)
        {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(%request_id, error = %e, "generation failed, returning error answer");
                format!("{}: {e}", self.config.generation.error_prefix)
            }
        };

        self.transition(request_id, PipelineStage::Done);
        answer
    }

    /// Observability record from the most recent request.
    pub fn last_report(&self) -> Option<&RetrievalReport> {
        self.last_report.as_ref()
    }

    /// Drain embedding degradation events accumulated across requests.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        self.embedder.drain_degradation_events()
    }

    /// Name of the embedding provider currently serving requests.
    pub fn active_embedding_provider(&self) -> &str {
        self.embedder.active_provider()
    }

    fn transition(&self, request_id: Uuid, stage: PipelineStage) {
        debug!(%request_id, ?stage, "pipeline stage");
    }
}
