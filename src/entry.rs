/// A key-value pair stored by the ordered collections in this crate.
#[derive(Clone, Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}
