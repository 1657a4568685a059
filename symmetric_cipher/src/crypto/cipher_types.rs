/// Mode of operation applied by the context.
///
/// ECB takes no IV; every other mode requires one of exactly the cipher's
/// block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
    RandomDelta,
}

impl CipherMode {
    /// CFB, OFB and CTR turn the block cipher into a keystream generator
    /// and never pad.
    pub fn is_stream(self) -> bool {
        matches!(self, CipherMode::CFB | CipherMode::OFB | CipherMode::CTR)
    }
}

/// Padding scheme applied by the context in block modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    Zeros,
    ANSIX923,
    PKCS7,
    ISO10126,
}

/// Source handed to the context's asynchronous entry points.
pub enum CipherInput {
    Bytes(Vec<u8>),
    File(String),
}

/// Sink handed to the context's asynchronous entry points.
pub enum CipherOutput {
    Buffer(Box<Vec<u8>>),
    File(String),
}
