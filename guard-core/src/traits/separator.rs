/// Source of break characters inserted into sensitive terms.
///
/// Each call is an independent draw. Implementations need not be
/// cryptographically random.
pub trait ISeparatorSource {
    fn next_separator(&mut self) -> char;
}
