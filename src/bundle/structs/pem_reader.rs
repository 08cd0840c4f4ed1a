pub struct PemReader<'a> {
    pub(crate) remaining: &'a [u8],
}
