use super::*;
use std::path::PathBuf;

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(a: &[f32]) -> f32 {
    a.iter().map(|x| x * x).sum::<f32>().sqrt()
}

mod config_tests {
    use super::*;

    #[test]
    fn test_minilm_config_default() {
        let config = MiniLmConfig::default();
        assert_eq!(config.embedding_dim, MINILM_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, MINILM_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_minilm_config_new_paths() {
        let config = MiniLmConfig::new("/models/all-MiniLM-L6-v2");
        assert_eq!(config.model_dir, PathBuf::from("/models/all-MiniLM-L6-v2"));
        assert_eq!(
            config.config_path(),
            PathBuf::from("/models/all-MiniLM-L6-v2/config.json")
        );
        assert_eq!(
            config.weights_path(),
            PathBuf::from("/models/all-MiniLM-L6-v2/model.safetensors")
        );
    }

    #[test]
    fn test_minilm_config_stub_validates() {
        let config = MiniLmConfig::stub();
        assert!(config.testing_stub);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_dir_no_stub() {
        let err = MiniLmConfig::default().validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
        assert!(err.to_string().contains("model_dir is required"));
    }

    #[test]
    fn test_validation_nonexistent_dir() {
        let err = MiniLmConfig::new("/nonexistent/minilm")
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_validation_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();

        let config = MiniLmConfig::new(dir.path());
        let missing = config.missing_files();
        assert_eq!(missing.len(), 2);
        assert!(missing.contains(&dir.path().join("tokenizer.json")));
        assert!(missing.contains(&dir.path().join("model.safetensors")));

        match config.validate().unwrap_err() {
            EmbeddingError::ModelNotFound { path } => {
                assert_eq!(path, dir.path().join("tokenizer.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validation_zero_dim_rejected_even_for_stub() {
        let err = MiniLmConfig::stub()
            .with_embedding_dim(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }
}

mod stub_tests {
    use super::*;

    #[test]
    fn test_stub_reports_mode_and_dim() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        assert!(embedder.is_stub());
        assert_eq!(embedder.mode(), "stub");
        assert_eq!(embedder.embedding_dim(), MINILM_EMBEDDING_DIM);
        assert!(format!("{:?}", embedder).contains("stub"));
    }

    #[test]
    fn test_stub_vectors_are_unit_length() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let vector = embedder.embed("Machine learning allows systems").unwrap();
        assert_eq!(vector.len(), MINILM_EMBEDDING_DIM);
        assert!((norm(&vector) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_stub_is_deterministic() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let a = embedder.embed("Education requires originality").unwrap();
        let b = embedder.embed("Education requires originality").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_ignores_case_and_punctuation() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let a = embedder
            .embed("Plagiarism is presenting someone else's work as your own.")
            .unwrap();
        let b = embedder
            .embed("plagiarism is presenting SOMEONE else's work as your own")
            .unwrap();
        assert!((dot(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_stub_shared_words_increase_similarity() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let reference = embedder
            .embed("Machine learning allows systems to learn from data.")
            .unwrap();
        let overlapping = embedder
            .embed("Machine learning systems learn patterns")
            .unwrap();
        let unrelated = embedder.embed("Bananas ripen quickly").unwrap();

        assert!(dot(&reference, &overlapping) > dot(&reference, &unrelated));
        assert!(dot(&reference, &overlapping) > 0.5);
    }

    #[test]
    fn test_stub_stop_words_only_yields_zero_vector() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let vector = embedder.embed("It is the").unwrap();
        assert!(vector.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_stub_batch_matches_single() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        let texts = ["first sentence", "second sentence", "third"];
        let batch = embedder.embed_batch(&texts).unwrap();
        assert_eq!(batch.len(), 3);
        for (text, vector) in texts.iter().zip(&batch) {
            assert_eq!(&embedder.embed(text).unwrap(), vector);
        }
    }

    #[test]
    fn test_stub_empty_batch() {
        let embedder = MiniLmEmbedder::stub().unwrap();
        assert!(embedder.embed_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_stub_custom_dim() {
        let embedder = MiniLmEmbedder::load(MiniLmConfig::stub().with_embedding_dim(64)).unwrap();
        assert_eq!(embedder.embedding_dim(), 64);
        assert_eq!(embedder.embed("dimension check").unwrap().len(), 64);
    }

    #[test]
    fn test_load_without_model_fails() {
        let err = MiniLmEmbedder::load(MiniLmConfig::new("/nonexistent/minilm")).unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }
}
