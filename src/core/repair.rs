// src/core/repair.rs
//
// Some pages were saved after a bad round trip: characters outside ASCII
// became U+FFFD in UTF-8, and the bytes were then read back as Windows-1252.
// The damage is not reversible in general, so only known words are restored.

/// (broken, fixed), applied in order.
pub const TITLE_FIXUPS: &[(&str, &str)] = &[
    ("CONFIGURAï¿½ï¿½O", "CONFIGURAÇÃO"),
];

pub fn repair_title(title: String) -> String {
    if !title.contains("ï¿½") {
        return title;
    }
    let mut out = title;
    for (broken, fixed) in TITLE_FIXUPS {
        if out.contains(broken) {
            log::debug!("Repairing title fragment {broken:?}");
            out = out.replace(broken, fixed);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_word_is_restored() {
        let t = s!("NOVA CONFIGURAï¿½ï¿½O DE ROTOR");
        assert_eq!(repair_title(t), "NOVA CONFIGURAÇÃO DE ROTOR");
    }

    #[test]
    fn unknown_damage_is_left_alone() {
        let t = s!("PROTEï¿½ï¿½O");
        assert_eq!(repair_title(t.clone()), t);
        assert_eq!(repair_title(s!("SEM DANOS")), "SEM DANOS");
    }
}
