//! Named keysyms for keys that do not type a character.
//!
//! Values are reproduced bit-for-bit from X11 `keysymdef.h` so the remote
//! protocol recognizes them.  Two aliases are intentional:
//!
//! - `R_ALT` and `ALTGR` are both `XK_ISO_Level3_Shift` (0xFE03).
//! - `WIN` and `L_SUPER` are both `XK_Super_L` (0xFFEB).

use super::Keysym;

pub const ALTGR: Keysym = Keysym(0xFE03); // XK_ISO_Level3_Shift
pub const BACKSPACE: Keysym = Keysym(0xFF08); // XK_BackSpace
pub const CAPS_LOCK: Keysym = Keysym(0xFFE5); // XK_Caps_Lock
pub const CONTEXT_MENU: Keysym = Keysym(0xFF67); // XK_Menu
pub const DELETE: Keysym = Keysym(0xFFFF); // XK_Delete
pub const DOWN: Keysym = Keysym(0xFF54); // XK_Down
pub const END: Keysym = Keysym(0xFF57); // XK_End
pub const ENTER: Keysym = Keysym(0xFF0D); // XK_Return
pub const ESCAPE: Keysym = Keysym(0xFF1B); // XK_Escape
pub const HOME: Keysym = Keysym(0xFF50); // XK_Home
pub const INSERT: Keysym = Keysym(0xFF63); // XK_Insert
pub const LEFT: Keysym = Keysym(0xFF51); // XK_Left
pub const NUM_LOCK: Keysym = Keysym(0xFF7F); // XK_Num_Lock
pub const PAGE_DOWN: Keysym = Keysym(0xFF56); // XK_Page_Down
pub const PAGE_UP: Keysym = Keysym(0xFF55); // XK_Page_Up
pub const PRINT_SCREEN: Keysym = Keysym(0xFF61); // XK_Print
pub const RIGHT: Keysym = Keysym(0xFF53); // XK_Right
pub const SCROLL_LOCK: Keysym = Keysym(0xFF14); // XK_Scroll_Lock
pub const TAB: Keysym = Keysym(0xFF09); // XK_Tab
pub const UP: Keysym = Keysym(0xFF52); // XK_Up

// Modifiers
pub const L_ALT: Keysym = Keysym(0xFFE9); // XK_Alt_L
pub const L_CTRL: Keysym = Keysym(0xFFE3); // XK_Control_L
pub const L_META: Keysym = Keysym(0xFFE7); // XK_Meta_L
pub const L_SHIFT: Keysym = Keysym(0xFFE1); // XK_Shift_L
pub const L_SUPER: Keysym = Keysym(0xFFEB); // XK_Super_L
pub const R_ALT: Keysym = ALTGR;
pub const R_CTRL: Keysym = Keysym(0xFFE4); // XK_Control_R
pub const R_META: Keysym = Keysym(0xFFE8); // XK_Meta_R
pub const R_SHIFT: Keysym = Keysym(0xFFE2); // XK_Shift_R
pub const R_SUPER: Keysym = Keysym(0xFFEC); // XK_Super_R
pub const WIN: Keysym = L_SUPER;

// Function keys (XK_F1..XK_F24 are contiguous)
pub const F1: Keysym = Keysym(0xFFBE);
pub const F2: Keysym = Keysym(0xFFBF);
pub const F3: Keysym = Keysym(0xFFC0);
pub const F4: Keysym = Keysym(0xFFC1);
pub const F5: Keysym = Keysym(0xFFC2);
pub const F6: Keysym = Keysym(0xFFC3);
pub const F7: Keysym = Keysym(0xFFC4);
pub const F8: Keysym = Keysym(0xFFC5);
pub const F9: Keysym = Keysym(0xFFC6);
pub const F10: Keysym = Keysym(0xFFC7);
pub const F11: Keysym = Keysym(0xFFC8);
pub const F12: Keysym = Keysym(0xFFC9);
pub const F13: Keysym = Keysym(0xFFCA);
pub const F14: Keysym = Keysym(0xFFCB);
pub const F15: Keysym = Keysym(0xFFCC);
pub const F16: Keysym = Keysym(0xFFCD);
pub const F17: Keysym = Keysym(0xFFCE);
pub const F18: Keysym = Keysym(0xFFCF);
pub const F19: Keysym = Keysym(0xFFD0);
pub const F20: Keysym = Keysym(0xFFD1);
pub const F21: Keysym = Keysym(0xFFD2);
pub const F22: Keysym = Keysym(0xFFD3);
pub const F23: Keysym = Keysym(0xFFD4);
pub const F24: Keysym = Keysym(0xFFD5);

/// Every named keysym, in the order [`name_of`] searches them.
///
/// Aliases appear once per name, so a value may be listed more than once.
pub const NAMED_KEYS: &[(&str, Keysym)] = &[
    ("ALTGR", ALTGR),
    ("BACKSPACE", BACKSPACE),
    ("CAPS_LOCK", CAPS_LOCK),
    ("CONTEXT_MENU", CONTEXT_MENU),
    ("DELETE", DELETE),
    ("DOWN", DOWN),
    ("END", END),
    ("ENTER", ENTER),
    ("ESCAPE", ESCAPE),
    ("F1", F1),
    ("F2", F2),
    ("F3", F3),
    ("F4", F4),
    ("F5", F5),
    ("F6", F6),
    ("F7", F7),
    ("F8", F8),
    ("F9", F9),
    ("F10", F10),
    ("F11", F11),
    ("F12", F12),
    ("F13", F13),
    ("F14", F14),
    ("F15", F15),
    ("F16", F16),
    ("F17", F17),
    ("F18", F18),
    ("F19", F19),
    ("F20", F20),
    ("F21", F21),
    ("F22", F22),
    ("F23", F23),
    ("F24", F24),
    ("HOME", HOME),
    ("INSERT", INSERT),
    ("L_ALT", L_ALT),
    ("L_CTRL", L_CTRL),
    ("LEFT", LEFT),
    ("L_META", L_META),
    ("L_SHIFT", L_SHIFT),
    ("L_SUPER", L_SUPER),
    ("NUM_LOCK", NUM_LOCK),
    ("PAGE_DOWN", PAGE_DOWN),
    ("PAGE_UP", PAGE_UP),
    ("PRINT_SCREEN", PRINT_SCREEN),
    ("R_ALT", R_ALT),
    ("R_CTRL", R_CTRL),
    ("RIGHT", RIGHT),
    ("R_META", R_META),
    ("R_SHIFT", R_SHIFT),
    ("R_SUPER", R_SUPER),
    ("SCROLL_LOCK", SCROLL_LOCK),
    ("TAB", TAB),
    ("UP", UP),
    ("WIN", WIN),
];

/// Looks up a named keysym, ignoring ASCII case.
///
/// Returns `None` if no key has that name.
pub fn lookup(name: &str) -> Option<Keysym> {
    NAMED_KEYS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, keysym)| keysym)
}

/// Returns the first table name for `keysym`.
///
/// For aliased values this is the name listed first in [`NAMED_KEYS`]
/// (`ALTGR` rather than `R_ALT`, `L_SUPER` rather than `WIN`).
pub fn name_of(keysym: Keysym) -> Option<&'static str> {
    NAMED_KEYS
        .iter()
        .find(|&&(_, candidate)| candidate == keysym)
        .map(|&(name, _)| name)
}

/// Returns the keysym of function key `F{n}`.
///
/// Returns `None` unless `1 <= n <= 24`.
pub fn function_key(n: u8) -> Option<Keysym> {
    match n {
        1..=24 => Some(Keysym(F1.0 + u32::from(n) - 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intentional_aliases_share_values() {
        assert_eq!(R_ALT, ALTGR);
        assert_eq!(WIN, L_SUPER);
        assert_eq!(lookup("R_ALT"), lookup("ALTGR"));
        assert_eq!(lookup("WIN"), lookup("L_SUPER"));
    }

    #[test]
    fn test_modifiers_match_keysymdef() {
        assert_eq!(L_CTRL, Keysym(0xFFE3));
        assert_eq!(R_CTRL, Keysym(0xFFE4));
        assert_eq!(L_SHIFT, Keysym(0xFFE1));
        assert_eq!(R_SHIFT, Keysym(0xFFE2));
        assert_eq!(L_ALT, Keysym(0xFFE9));
        assert_eq!(L_META, Keysym(0xFFE7));
        assert_eq!(R_META, Keysym(0xFFE8));
        assert_eq!(R_SUPER, Keysym(0xFFEC));
    }

    #[test]
    fn test_editing_and_navigation_keys_match_keysymdef() {
        assert_eq!(BACKSPACE, Keysym(0xFF08));
        assert_eq!(DELETE, Keysym(0xFFFF));
        assert_eq!(ENTER, Keysym(0xFF0D));
        assert_eq!(ESCAPE, Keysym(0xFF1B));
        assert_eq!(TAB, Keysym(0xFF09));
        assert_eq!(INSERT, Keysym(0xFF63));
        assert_eq!(CONTEXT_MENU, Keysym(0xFF67));
        assert_eq!(PRINT_SCREEN, Keysym(0xFF61));
        assert_eq!(SCROLL_LOCK, Keysym(0xFF14));
        assert_eq!(NUM_LOCK, Keysym(0xFF7F));
        assert_eq!(CAPS_LOCK, Keysym(0xFFE5));
    }

    #[test]
    fn test_arrow_keys_match_keysymdef() {
        assert_eq!(LEFT, Keysym(0xFF51));
        assert_eq!(UP, Keysym(0xFF52));
        assert_eq!(RIGHT, Keysym(0xFF53));
        assert_eq!(DOWN, Keysym(0xFF54));
    }

    #[test]
    fn test_function_keys_are_contiguous() {
        assert_eq!(function_key(1), Some(F1));
        assert_eq!(function_key(12), Some(F12));
        assert_eq!(function_key(13), Some(F13));
        assert_eq!(function_key(24), Some(F24));
        assert_eq!(F24, Keysym(0xFFD5));
        assert_eq!(function_key(0), None);
        assert_eq!(function_key(25), None);
    }

    #[test]
    fn test_every_function_key_is_named() {
        for n in 1..=24u8 {
            assert_eq!(lookup(&format!("F{n}")), function_key(n), "F{n}");
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup("l_ctrl"), Some(L_CTRL));
        assert_eq!(lookup("Enter"), Some(ENTER));
        assert_eq!(lookup("NOT_A_KEY"), None);
    }

    #[test]
    fn test_name_of_prefers_first_listed_alias() {
        assert_eq!(name_of(Keysym(0xFE03)), Some("ALTGR"));
        assert_eq!(name_of(Keysym(0xFFEB)), Some("L_SUPER"));
        assert_eq!(name_of(L_CTRL), Some("L_CTRL"));
        assert_eq!(name_of(Keysym(0x41)), None);
    }

    #[test]
    fn test_table_names_are_unique() {
        for (i, (name, _)) in NAMED_KEYS.iter().enumerate() {
            assert!(
                NAMED_KEYS[i + 1..].iter().all(|(other, _)| other != name),
                "{name} listed twice"
            );
        }
    }
}
