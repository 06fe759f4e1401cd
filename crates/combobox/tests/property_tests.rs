use combobox::navigation::{Cursor, NavigationPolicy};
use combobox::{Combobox, KeyMsg, KeyType};
use proptest::prelude::*;

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z ]{0,8}", 0..12)
}

fn policy() -> impl Strategy<Value = NavigationPolicy> {
    prop_oneof![
        Just(NavigationPolicy::VisibleOnly),
        Just(NavigationPolicy::AllRows)
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Next,
    Prev,
    Type(String),
    Hover(usize),
}

fn steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            Just(Step::Next),
            Just(Step::Prev),
            "[a-z]{0,2}".prop_map(Step::Type),
            (0usize..16).prop_map(Step::Hover),
        ],
        0..40,
    )
}

proptest! {
    #[test]
    fn test_rows_match_options(options in labels()) {
        let mut combo = Combobox::new("p");
        combo.set_options(options.clone());

        // Invariant: one row per option, same order
        let rendered: Vec<String> = combo.rows().iter().map(|r| r.label.clone()).collect();
        prop_assert_eq!(&rendered, &options);
        prop_assert_eq!(combo.options().unwrap(), options);
    }

    #[test]
    fn test_filter_visibility(options in labels(), text in "[a-zA-Z]{0,3}") {
        let mut combo = Combobox::new("p");
        combo.set_options(options);
        combo.on_input(&text);

        // Invariant: every row at once obeys the substring rule
        let needle = text.to_lowercase();
        for row in combo.rows() {
            prop_assert_eq!(row.visible, row.label.to_lowercase().contains(&needle));
        }
        prop_assert_eq!(combo.cursor(), Cursor::None);
    }

    #[test]
    fn test_cursor_stays_in_bounds(options in labels(), policy in policy(), steps in steps()) {
        let mut combo = Combobox::new("p").with_navigation(policy);
        combo.set_options(options);
        combo.on_focus();

        for step in steps {
            match step {
                Step::Next => combo.move_next(),
                Step::Prev => combo.move_prev(),
                Step::Type(text) => combo.on_input(&text),
                Step::Hover(i) => combo.on_hover(i),
            }

            // Invariant: cursor is none or a valid row index
            if let Some(i) = combo.cursor().index() {
                prop_assert!(i < combo.rows().len());
                if policy == NavigationPolicy::VisibleOnly {
                    prop_assert!(combo.rows()[i].visible);
                }
            }

            // Invariant: at most one row is selected
            let selected = combo.render_tree().list.rows.iter().filter(|r| r.selected).count();
            prop_assert!(selected <= 1);
        }
    }

    #[test]
    fn test_next_cycle_law(options in prop::collection::vec("[a-z]{1,4}", 1..12)) {
        let n = options.len();
        let mut combo = Combobox::new("p");
        combo.set_options(options);

        combo.move_next();
        prop_assert_eq!(combo.cursor(), Cursor::At(0));

        let mut seen = vec![false; n];
        for _ in 0..n {
            let i = combo.cursor().index().unwrap();
            seen[i] = true;
            combo.move_next();
        }

        // Invariant: N moves visit every row and wrap back to the first
        prop_assert!(seen.iter().all(|s| *s));
        prop_assert_eq!(combo.cursor(), Cursor::At(0));
    }

    #[test]
    fn test_prev_from_none_lands_on_last(options in prop::collection::vec("[a-z]{1,4}", 1..12)) {
        let mut combo = Combobox::new("p");
        combo.set_options(options.clone());
        combo.on_focus();
        combo.on_keydown(&KeyMsg::from_type(KeyType::Up));
        prop_assert_eq!(combo.cursor(), Cursor::At(options.len() - 1));
    }

    #[test]
    fn test_commit_copies_label(options in prop::collection::vec("[a-z]{1,4}", 1..12), hover in 0usize..12) {
        let mut combo = Combobox::new("p");
        combo.set_options(options.clone());
        combo.on_focus();
        combo.on_hover(hover);

        let result = combo.on_keydown(&KeyMsg::from_type(KeyType::Enter));
        match options.get(hover) {
            Some(label) => {
                prop_assert_eq!(result.change.map(|c| c.value), Some(label.clone()));
                prop_assert_eq!(&combo.value(), label);
            }
            None => {
                prop_assert!(result.change.is_none());
                prop_assert_eq!(combo.value(), "");
            }
        }
    }

    #[test]
    fn test_selected_row_is_inside_window(count in 1usize..30, height in 1usize..8, moves in 0usize..60) {
        let options: Vec<String> = (0..count).map(|i| format!("opt{i}")).collect();
        let mut combo = Combobox::new("p").with_list_height(height);
        combo.set_options(options);
        combo.on_focus();
        for _ in 0..=moves {
            combo.move_next();
        }

        // Invariant: the highlighted row is drawn
        let i = combo.cursor().index().unwrap();
        prop_assert!(combo.viewport().window(count).contains(&i));
    }
}
