use crate::iter::*;

pub struct ForEachRecords<R: Records, F: FnMut(&mut Record)> {
    records: R,
    func: F,
}

impl<R: Records, F: FnMut(&mut Record)> ForEachRecords<R, F> {
    pub fn new(records: R, func: F) -> Self {
        Self { records, func }
    }
}

impl<R: Records, F: FnMut(&mut Record)> Records for ForEachRecords<R, F> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;

        for record in records.iter_mut() {
            (self.func)(record);
        }

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()
    }
}
