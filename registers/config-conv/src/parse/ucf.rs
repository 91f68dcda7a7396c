// Licensed under the Apache-2.0 license

//! Line-format (UCF) parser.
//!
//! Each non-blank line that does not start with `--` holds one command:
//!
//! ```text
//! -- LSM6DSO free-fall configuration
//! Ac 10 60          vendor write, bare tokens are hex
//! WAIT 5            vendor delay in milliseconds
//! WRITE 0x20 0x01   bare tokens are decimal, 0x selects hex
//! DELAY 0x00 10
//! ```

use crate::error::{ConvError, Location, Result};
use crate::model::{ConfigurationSequence, FileType, RegisterOperation};
use crate::ucf_entry::MemsUcfOp;
use crate::util::{parse_byte, Radix};

const COMMENT_MARKER: &str = "--";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Keyword {
    Ac,
    Wait,
    Write,
    Delay,
    Read,
    PollSet,
    PollReset,
}

impl Keyword {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "Ac" => Some(Keyword::Ac),
            "WAIT" => Some(Keyword::Wait),
            "WRITE" => Some(Keyword::Write),
            "DELAY" => Some(Keyword::Delay),
            "READ" => Some(Keyword::Read),
            "POLL_SET" => Some(Keyword::PollSet),
            "POLL_RESET" => Some(Keyword::PollReset),
            _ => None,
        }
    }

    /// Tokens on the line, keyword included.
    fn token_count(self) -> usize {
        match self {
            Keyword::Wait => 2,
            _ => 3,
        }
    }

    fn default_radix(self) -> Radix {
        match self {
            Keyword::Ac => Radix::Hex,
            _ => Radix::Decimal,
        }
    }

    fn op(self) -> MemsUcfOp {
        match self {
            Keyword::Ac | Keyword::Write => MemsUcfOp::Write,
            Keyword::Wait | Keyword::Delay => MemsUcfOp::Delay,
            Keyword::Read => MemsUcfOp::Read,
            Keyword::PollSet => MemsUcfOp::PollSet,
            Keyword::PollReset => MemsUcfOp::PollReset,
        }
    }
}

/// Parses UCF text into a sequence, one operation per command line.
pub fn parse(content: &str) -> Result<ConfigurationSequence> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut sequence = ConfigurationSequence::new(FileType::Ucf);
    for (idx, line) in content.lines().enumerate() {
        if let Some(op) = parse_line(line, idx + 1)? {
            sequence.push(op);
        }
    }
    Ok(sequence)
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<RegisterOperation>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let keyword = Keyword::from_token(tokens[0]).ok_or_else(|| {
        ConvError::parse(
            Location::Line(line_no),
            format!("unrecognized command `{}`", tokens[0]),
        )
    })?;

    if tokens.len() != keyword.token_count() {
        return Err(ConvError::parse(
            Location::Line(line_no),
            format!(
                "`{}` takes {} tokens, found {}",
                tokens[0],
                keyword.token_count(),
                tokens.len()
            ),
        ));
    }

    let byte = |token: &str| {
        parse_byte(token, keyword.default_radix())
            .map_err(|reason| ConvError::parse(Location::Line(line_no), reason))
    };

    let op = match keyword {
        Keyword::Wait => RegisterOperation::delay(byte(tokens[1])?),
        _ => RegisterOperation::new(keyword.op(), byte(tokens[1])?, byte(tokens[2])?),
    };
    Ok(Some(op))
}
