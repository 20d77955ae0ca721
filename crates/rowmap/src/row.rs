use rowmap_core::Record;

/// A source row produced by the database layer.
///
/// Implemented by `#[derive(Row)]`. Hand-built [`Record`]s are rows too.
pub trait Row {
    fn to_record(&self) -> Record;
}

impl Row for Record {
    fn to_record(&self) -> Record {
        self.clone()
    }
}

impl<T: Row + ?Sized> Row for &T {
    fn to_record(&self) -> Record {
        (**self).to_record()
    }
}

impl<T: Row + ?Sized> Row for Box<T> {
    fn to_record(&self) -> Record {
        (**self).to_record()
    }
}
