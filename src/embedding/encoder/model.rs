use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;
use std::sync::Arc;

/// BERT-family sentence encoder with attention-masked mean pooling.
#[derive(Clone)]
pub(crate) struct MeanPooledBert {
    bert: Arc<BertModel>,
    hidden_size: usize,
}

impl MeanPooledBert {
    pub(crate) fn load(model_dir: &Path, device: &Device) -> Result<Self> {
        let config_content = std::fs::read_to_string(model_dir.join("config.json"))?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let weights_path = model_dir.join("model.safetensors");
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        // sentence-transformers exports are usually unprefixed; raw HF checkpoints are not.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            bert: Arc::new(bert),
            hidden_size: config.hidden_size,
        })
    }

    pub(crate) fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Returns the pooled `[hidden_size]` vector for one tokenized input.
    pub(crate) fn embed(
        &self,
        token_ids: &[u32],
        type_ids: &[u32],
        attention_mask: &[u32],
        device: &Device,
    ) -> Result<Vec<f32>> {
        let input_ids = Tensor::new(token_ids, device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(type_ids, device)?.unsqueeze(0)?;
        let mask = Tensor::new(attention_mask, device)?.unsqueeze(0)?;

        // [1, seq_len, hidden]
        let hidden = self
            .bert
            .forward(&input_ids, &token_type_ids, Some(&mask))?;

        // [1, seq_len, 1]
        let mask = mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?;

        summed.broadcast_div(&counts)?.squeeze(0)?.to_vec1::<f32>()
    }
}
