#![no_std]

pub static ERROR_UNAUTHORIZED: &[u8] = b"Unauthorized";

pub static ERROR_UNAUTHORIZED_REPORTER: &[u8] = b"Unauthorized reporter";

pub static ERROR_OUT_OF_BOUNDS: &[u8] = b"Answer out of bounds";

pub static ERROR_STALE_ROUND: &[u8] = b"Stale round";

pub static ERROR_ROUND_NOT_FOUND: &[u8] = b"Round not found";

pub static ERROR_NO_DATA_AVAILABLE: &[u8] = b"No data present";

pub static ERROR_NO_PROPOSAL_PENDING: &[u8] = b"No proposed aggregator present";

pub static ERROR_PROPOSAL_MISMATCH: &[u8] = b"Invalid proposed aggregator";

pub static ERROR_INVALID_AGGREGATOR: &[u8] = b"Invalid aggregator.";

pub static ERROR_INVALID_QUORUM: &[u8] = b"Invalid quorum";

pub static ERROR_INVALID_ANSWER_BOUNDS: &[u8] = b"Invalid answer bounds";

pub static ERROR_DUPLICATE_REPORTER: &[u8] = b"Duplicate reporter";

pub static ERROR_TOO_MANY_REPORTERS: &[u8] = b"Too many reporters";

pub static ERROR_PHASE_NOT_FOUND: &[u8] = b"Phase not found";

pub static ERROR_NO_SUBMISSIONS: &[u8] = b"No submissions";

pub static ERROR_PHASE_LIMIT_REACHED: &[u8] = b"Phase limit reached";
