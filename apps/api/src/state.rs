use std::sync::Arc;

use crate::config::{Config, SynthesisBackend};
use crate::errors::AppError;
use crate::llm_client::LlmBackend;
use crate::portfolio::{
    AiAssistant, MockSynthesizer, PortfolioSynthesizer, RemoteSynthesizer, StageTiming,
};
use crate::safety::RateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mock: Arc<dyn PortfolioSynthesizer>,
    /// Present only when an LLM backend is configured.
    pub remote: Option<Arc<dyn PortfolioSynthesizer>>,
    pub assistant: Option<Arc<AiAssistant>>,
}

impl AppState {
    pub fn new(config: Config, llm: Option<Arc<dyn LlmBackend>>) -> Self {
        let timing = if config.simulate_latency {
            StageTiming::default()
        } else {
            StageTiming::instant()
        };
        // One window shared by remote generation and every assistant call.
        let rate_limiter =
            RateLimiter::new(config.ai_rate_limit_max, config.ai_rate_limit_window).shared();

        let remote = llm.as_ref().map(|llm| {
            Arc::new(RemoteSynthesizer::new(Arc::clone(llm), rate_limiter.clone()))
                as Arc<dyn PortfolioSynthesizer>
        });
        let assistant = llm.map(|llm| Arc::new(AiAssistant::new(llm, rate_limiter)));

        Self {
            config,
            mock: Arc::new(MockSynthesizer::new(timing)),
            remote,
            assistant,
        }
    }

    /// Resolves a backend choice to a synthesizer. Remote without a configured
    /// LLM is `Unavailable`; there is no silent fallback to the mock.
    pub fn synthesizer(
        &self,
        backend: SynthesisBackend,
    ) -> Result<Arc<dyn PortfolioSynthesizer>, AppError> {
        match backend {
            SynthesisBackend::Mock => Ok(Arc::clone(&self.mock)),
            SynthesisBackend::Remote => self.remote.clone().ok_or(AppError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::fake::ScriptedBackend;
    use crate::portfolio::assistant::RefineKind;

    fn instant_config() -> Config {
        Config {
            simulate_latency: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_without_llm_only_mock_is_available() {
        let state = AppState::new(instant_config(), None);
        assert_eq!(state.synthesizer(SynthesisBackend::Mock).unwrap().backend(), "mock");
        assert!(matches!(
            state.synthesizer(SynthesisBackend::Remote),
            Err(AppError::Unavailable)
        ));
        assert!(state.assistant.is_none());
    }

    #[test]
    fn test_with_llm_remote_and_assistant_are_wired() {
        let llm: Arc<dyn LlmBackend> = Arc::new(ScriptedBackend::replying("{}"));
        let state = AppState::new(instant_config(), Some(llm));
        assert_eq!(
            state.synthesizer(SynthesisBackend::Remote).unwrap().backend(),
            "remote"
        );
        assert!(state.assistant.is_some());
    }

    #[tokio::test]
    async fn test_remote_and_assistant_draw_from_one_window() {
        let config = Config {
            ai_rate_limit_max: 1,
            ..instant_config()
        };
        let llm: Arc<dyn LlmBackend> = Arc::new(ScriptedBackend::replying("Sharper bio"));
        let state = AppState::new(config, Some(llm));
        let assistant = state.assistant.clone().unwrap();

        assistant
            .refine_text("I write software", RefineKind::Bio)
            .await
            .unwrap();
        assert_eq!(assistant.quota().await.remaining, 0);

        let remote = state.synthesizer(SynthesisBackend::Remote).unwrap();
        let err = remote
            .synthesize("Senior engineer with ten years of Rust", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RateLimited { .. }));
    }
}
