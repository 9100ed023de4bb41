/// Authentication frame parser (management subtype 11).
///
/// Body layout after the 24-byte header:
///   [algorithm u16][transaction sequence u16][status code u16] [elements...]
///
/// The algorithm decides how the exchange proceeds, so an unknown value means
/// the frame cannot be trusted and is rejected. The status code is
/// informational: unknown values are kept and labeled.
use crate::codes::status_label;
use crate::error::DecodeError;
use crate::field::Field;
use crate::header::{FrameSubtype, MacHeader, MAC_HEADER_LEN};
use crate::metadata::FrameMetadata;
use crate::parser::{FrameParser, ParseCounters};
use crate::record::{AuthAlgorithm, AuthenticationFrame, FrameRecord};

const ALGORITHM: Field<2> = Field::le(MAC_HEADER_LEN);
const TRANSACTION_SEQUENCE: Field<2> = Field::le(MAC_HEADER_LEN + 2);
const STATUS_CODE: Field<2> = Field::le(MAC_HEADER_LEN + 4);

static COUNTERS: ParseCounters = ParseCounters::new();

pub struct AuthenticationParser;

impl FrameParser for AuthenticationParser {
    const NAME: &'static str = "authentication";
    const SUBTYPE: FrameSubtype = FrameSubtype::Authentication;

    type Record = AuthenticationFrame;

    fn counters() -> &'static ParseCounters {
        &COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<AuthenticationFrame, DecodeError> {
        ALGORITHM.validate(payload)?;
        TRANSACTION_SEQUENCE.validate(payload)?;
        STATUS_CODE.validate(payload)?;

        let algorithm_code = ALGORITHM.read(payload)?;
        let algorithm = match algorithm_code {
            0 => AuthAlgorithm::OpenSystem,
            1 => AuthAlgorithm::SharedKey,
            code => {
                return Err(DecodeError::InvalidCode {
                    field: "algorithm type",
                    code: code as i16,
                })
            }
        };

        let status_code = STATUS_CODE.read(payload)?;

        Ok(AuthenticationFrame {
            algorithm,
            status_code,
            status: status_label(status_code),
            transaction_sequence: TRANSACTION_SEQUENCE.read(payload)?,
            destination: header.destination(),
            transmitter: header.transmitter(),
            meta: *meta,
        })
    }

    fn wrap(record: AuthenticationFrame) -> FrameRecord {
        FrameRecord::Authentication(record)
    }
}
