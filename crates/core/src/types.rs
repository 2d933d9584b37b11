/// Records are addressed by opaque string identifiers (e.g. `TPD123qweasd`).
pub type RecordId = String;
