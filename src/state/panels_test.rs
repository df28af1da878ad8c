use super::*;

fn group(name: &str) -> PanelEntry {
    PanelEntry::Group { group_name: name.to_owned() }
}

fn item(name: &str, value: &str, key: Option<&str>) -> PanelEntry {
    PanelEntry::Item { name: name.to_owned(), value: value.to_owned(), key: key.map(str::to_owned) }
}

#[test]
fn info_rows_render_headers_and_pairs_without_links() {
    let rows = info_rows(&[group("Crypto"), item("Tickers", "812", Some("tickers"))]);
    assert_eq!(
        rows,
        vec![
            PanelRow::Header("Crypto".to_owned()),
            PanelRow::Pair { name: "Tickers".to_owned(), value: "812".to_owned(), link: None },
        ]
    );
}

#[test]
fn event_rows_link_to_detail_by_key() {
    let rows = event_rows(&[item("Not updated", "3", Some("not_updated"))], Some("/admin/events"), false);
    assert_eq!(
        rows,
        vec![PanelRow::Pair {
            name: "Not updated".to_owned(),
            value: "3".to_owned(),
            link: Some("/admin/events?event=not_updated".to_owned()),
        }]
    );
}

#[test]
fn grouped_event_rows_add_lowercased_group_segment() {
    let rows = event_rows(
        &[group("Crypto"), item("Not updated", "3", Some("not_updated")), group("Stocks"), item("Errors", "1", Some("errors"))],
        Some("/admin/events?market=all"),
        true,
    );
    let links: Vec<_> = rows
        .iter()
        .filter_map(|r| match r {
            PanelRow::Pair { link, .. } => link.clone(),
            PanelRow::Header(_) => None,
        })
        .collect();
    assert_eq!(
        links,
        vec![
            "/admin/events/crypto?market=all&event=not_updated".to_owned(),
            "/admin/events/stocks?market=all&event=errors".to_owned(),
        ]
    );
}

#[test]
fn event_rows_without_key_or_base_are_inert() {
    let rows = event_rows(&[item("Total", "9", None)], Some("/admin/events"), false);
    assert!(matches!(&rows[0], PanelRow::Pair { link: None, .. }));
    let rows = event_rows(&[item("Total", "9", Some("total"))], None, false);
    assert!(matches!(&rows[0], PanelRow::Pair { link: None, .. }));
}

#[test]
fn empty_policy_is_applied_uniformly() {
    assert_eq!(display(Vec::new(), EmptyPolicy::Hide), PanelDisplay::Hidden);
    assert_eq!(display(Vec::new(), EmptyPolicy::Placeholder), PanelDisplay::Placeholder);
    let rows = vec![PanelRow::Header("x".to_owned())];
    assert_eq!(display(rows.clone(), EmptyPolicy::Hide), PanelDisplay::Rows(rows));
}
