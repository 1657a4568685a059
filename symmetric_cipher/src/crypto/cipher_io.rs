use crate::crypto::cipher_types::CipherOutput;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Deliver processed bytes to the caller's chosen sink.
pub fn write_all(output: &mut CipherOutput, data: &[u8]) -> io::Result<()> {
    match output {
        CipherOutput::Buffer(buffer) => {
            buffer.clear();
            buffer.extend_from_slice(data);
            Ok(())
        }
        CipherOutput::File(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(data)?;
            writer.flush()
        }
    }
}
