use std::fmt;

/// Stages a request moves through, in order. A failure in any stage ends the
/// request with no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Both photos and the optional height have been handed to the pipeline.
    Received,
    Decoded,
    Resized,
    Preprocessed,
    Estimated,
    Validated,
    Assembled,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 7] = [
        PipelineStage::Received,
        PipelineStage::Decoded,
        PipelineStage::Resized,
        PipelineStage::Preprocessed,
        PipelineStage::Estimated,
        PipelineStage::Validated,
        PipelineStage::Assembled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStage::Received => "receive",
            PipelineStage::Decoded => "decode",
            PipelineStage::Resized => "resize",
            PipelineStage::Preprocessed => "preprocess",
            PipelineStage::Estimated => "estimate",
            PipelineStage::Validated => "validate",
            PipelineStage::Assembled => "assemble",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
