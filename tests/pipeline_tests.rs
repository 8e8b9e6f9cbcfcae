//! End-to-end pipeline tests over a stubbed inference service.
//!
//! One round: primer file on disk, seeded sampling, three canned stage
//! responses, ranked output.

use std::cell::RefCell;
use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use bisociate::{
    run_pipeline, BisociateError, CompletionClient, CompletionRequest, Config, Result,
};

/// Replays canned stage responses in order.
struct StubClient {
    responses: RefCell<Vec<String>>,
}

impl StubClient {
    fn new(responses: &[&str]) -> Self {
        let mut queued: Vec<String> = responses.iter().map(|s| s.to_string()).collect();
        queued.reverse();
        Self {
            responses: RefCell::new(queued),
        }
    }
}

impl CompletionClient for StubClient {
    fn complete(&self, _request: &CompletionRequest) -> Result<String> {
        self.responses
            .borrow_mut()
            .pop()
            .ok_or_else(|| BisociateError::Inference("stub exhausted".to_string()))
    }
}

fn ten_entry_primer() -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
    for i in 1..=10 {
        writeln!(file, "- Mechanism number {} does something interesting", i).unwrap();
    }
    file
}

fn test_config(primer: &NamedTempFile) -> Config {
    Config {
        problem: "keep solar panels dust-free without water".to_string(),
        primer_file: primer.path().to_path_buf(),
        samples: 6,
        token: "test-token".to_string(),
        ..Config::default()
    }
}

const RANKING_PAYLOAD: &str = r#"[
    {"idea": "Electrostatic shaker grid", "relevance": 9, "plausibility": 8, "reasoning": "proven on Mars rovers"},
    {"idea": "Lotus-effect nanocoating", "relevance": 8, "plausibility": 8, "reasoning": "commercially available"},
    {"idea": "Acoustic levitation sweep", "relevance": 7, "plausibility": 3, "reasoning": "energy-hungry"},
    {"idea": "Tilting panel flip cycle", "relevance": 5, "plausibility": 9, "reasoning": "mechanically simple"},
    {"idea": "Dew-harvesting rinse fins", "relevance": 6, "plausibility": 6, "reasoning": "climate dependent"}
]"#;

// =============================================================================
// End-to-end round
// =============================================================================

mod end_to_end_tests {
    use super::*;

    #[test]
    fn test_round_produces_three_ranked_ideas_in_score_order() {
        let primer = ten_entry_primer();
        let config = test_config(&primer);
        let client = StubClient::new(&[
            "Both mechanisms exploit surface microstructure.",
            "1. First idea\n2. Second idea\n3. Third\n4. Fourth\n5. Fifth",
            RANKING_PAYLOAD,
        ]);
        let mut rng = StdRng::seed_from_u64(11);

        let report = run_pipeline(&config, &client, &mut rng).unwrap();

        // Combined scores: 17, 16, 10, 14, 12 -> top 3 in descending order
        assert_eq!(report.ranked.len(), 3);
        assert!(report.ranked[0].starts_with("Electrostatic shaker grid [17/20]"));
        assert!(report.ranked[1].starts_with("Lotus-effect nanocoating [16/20]"));
        assert!(report.ranked[2].starts_with("Tilting panel flip cycle [14/20]"));
    }

    #[test]
    fn test_round_report_carries_all_stage_output() {
        let primer = ten_entry_primer();
        let config = test_config(&primer);
        let client = StubClient::new(&["connection text", "ideation text", RANKING_PAYLOAD]);
        let mut rng = StdRng::seed_from_u64(5);

        let report = run_pipeline(&config, &client, &mut rng).unwrap();

        assert_eq!(report.outcome.connection, "connection text");
        assert_eq!(report.outcome.ideation, "ideation text");
        assert_eq!(report.outcome.ranking_raw, RANKING_PAYLOAD);

        assert_eq!(report.mechanisms.len(), 6);
        for mechanism in &report.mechanisms {
            assert!(mechanism.starts_with("Mechanism number"));
        }
    }

    #[test]
    fn test_unparseable_ranking_payload_degrades_to_diagnostic() {
        let primer = ten_entry_primer();
        let config = test_config(&primer);
        let client = StubClient::new(&["connection", "ideas", "Sorry, I cannot rank these."]);
        let mut rng = StdRng::seed_from_u64(2);

        let report = run_pipeline(&config, &client, &mut rng).unwrap();

        assert_eq!(report.ranked.len(), 1);
        assert!(report.ranked[0].contains("Sorry, I cannot rank these."));
    }
}

// =============================================================================
// Failure modes
// =============================================================================

mod failure_tests {
    use super::*;

    #[test]
    fn test_missing_primer_file_fails_the_round() {
        let config = Config {
            problem: "anything".to_string(),
            primer_file: "/nonexistent/primer.yaml".into(),
            token: "t".to_string(),
            ..Config::default()
        };
        let client = StubClient::new(&[]);
        let mut rng = StdRng::seed_from_u64(0);

        let err = run_pipeline(&config, &client, &mut rng).unwrap_err();
        assert!(matches!(err, BisociateError::PrimerNotFound { .. }));
    }

    #[test]
    fn test_oversized_sample_request_fails_the_round() {
        let primer = ten_entry_primer();
        let config = Config {
            samples: 11,
            ..test_config(&primer)
        };
        let client = StubClient::new(&[]);
        let mut rng = StdRng::seed_from_u64(0);

        let err = run_pipeline(&config, &client, &mut rng).unwrap_err();
        assert!(matches!(err, BisociateError::Config(_)));
    }

    #[test]
    fn test_failed_inference_propagates() {
        let primer = ten_entry_primer();
        let config = test_config(&primer);
        // Stage 2 has no canned response
        let client = StubClient::new(&["connection only"]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = run_pipeline(&config, &client, &mut rng).unwrap_err();
        assert!(matches!(err, BisociateError::Inference(_)));
    }
}

// =============================================================================
// CLI-facing validation
// =============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_missing_problem_statement_is_reported() {
        let config = Config {
            token: "t".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Problem statement is required"));
    }

    #[test]
    fn test_missing_token_is_reported() {
        let config = Config {
            problem: "a problem".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }
}
