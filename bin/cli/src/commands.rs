pub(crate) mod convert;
pub(crate) mod version;

pub(crate) trait Execute {
    fn execute(&self) -> anyhow::Result<Option<String>>;
}
