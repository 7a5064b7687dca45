/// Common behavior for aggregate id newtypes.
///
/// Every aggregate id wraps a UUID and travels over the wire as its string
/// form; the trait keeps parsing and formatting uniform across the catalog.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}
