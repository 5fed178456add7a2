#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Suppresses decorative output. 1 hides headers and banners,
    /// 2 additionally hides per-page progress lines.
    pub quiet: u8,

    /// Skips the startup banner without touching the rest of the output.
    pub no_banner: bool,

    /// Disables the copyright-year transform that runs after all
    /// fragments have settled.
    pub no_year: bool,
}
