use super::*;

fn clock_format() -> Option<&'static [FormatItem<'static>]> {
    static FMT: OnceLock<Option<Vec<FormatItem<'static>>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[hour padding:zero]:[minute padding:zero]:[second padding:zero]")
            .ok()
    })
    .as_deref()
}

pub(super) fn fmt_clock(ts: OffsetDateTime) -> String {
    clock_format()
        .and_then(|fmt| ts.format(fmt).ok())
        .unwrap_or_else(|| ts.unix_timestamp().to_string())
}
