//! Outbound quote-page links. A wrong guess here only produces a dead link
//! in the user's browser; there is no error path to handle.

use crate::instrument::{Instrument, InstrumentKind};

/// Build the EastMoney quote URL for an instrument.
pub fn eastmoney_url(instrument: &Instrument) -> String {
    let code = instrument.code.as_str();

    match instrument.kind {
        InstrumentKind::Stock | InstrumentKind::ConvertibleBond => {
            format!(
                "https://quote.eastmoney.com/{}{}.html",
                market_prefix(code),
                code
            )
        }
        InstrumentKind::Concept | InstrumentKind::Industry => {
            format!("https://quote.eastmoney.com/center/boardlist.html#boards-{code}")
        }
    }
}

/// Shanghai-listed codes start with 5/6/9, convertibles with 11x;
/// everything else trades in Shenzhen.
fn market_prefix(code: &str) -> &'static str {
    match code.as_bytes().first() {
        Some(b'5' | b'6' | b'9') => "sh",
        Some(b'1') if code.starts_with("11") => "sh",
        _ => "sz",
    }
}

/// Open the instrument's quote page in the system browser.
pub fn open_in_browser(instrument: &Instrument) {
    let url = eastmoney_url(instrument);

    if let Err(err) = open::that_detached(&url) {
        log::error!("Failed to open {url}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_by_kind_and_market() {
        let sh_stock = Instrument::new("600036", "CMB", InstrumentKind::Stock);
        assert_eq!(
            eastmoney_url(&sh_stock),
            "https://quote.eastmoney.com/sh600036.html"
        );

        let sz_stock = Instrument::new("000001", "PAB", InstrumentKind::Stock);
        assert_eq!(
            eastmoney_url(&sz_stock),
            "https://quote.eastmoney.com/sz000001.html"
        );

        let bond = Instrument::new("113009", "Aviation EB", InstrumentKind::ConvertibleBond);
        assert_eq!(
            eastmoney_url(&bond),
            "https://quote.eastmoney.com/sh113009.html"
        );

        let sz_bond = Instrument::new("123456", "SZ CB", InstrumentKind::ConvertibleBond);
        assert_eq!(
            eastmoney_url(&sz_bond),
            "https://quote.eastmoney.com/sz123456.html"
        );

        let concept = Instrument::new("BK0493", "New Energy", InstrumentKind::Concept);
        assert_eq!(
            eastmoney_url(&concept),
            "https://quote.eastmoney.com/center/boardlist.html#boards-BK0493"
        );
    }
}
