//! End-to-end tests from CSV text to rendered output
//!
//! These tests run the parser, session and renderer together the way the
//! `show`, `summary` and `browse` commands do.

use contact_viewer::app::loader::outcome_from_text;
use contact_viewer::app::models::Field;
use contact_viewer::app::{DetailView, FilterState, Session, Toggles, Update};
use contact_viewer::cli::{run_browser, Renderer};

const CSV: &str = "first_name,last_name,company_name,address,city,county,state,zip,phone1,phone2,email,web
James,Butt,\"Benton, John B Jr\",6649 N Blue Gum St,New Orleans,Orleans,LA,70116,504-621-8927,504-845-1427,jbutt@gmail.com,http://www.bentonjohnbjr.com
Lenna,Paprocki,Feltz Printing Service,639 Main St,Anchorage,Anchorage,AK,99501,907-385-4412,907-921-2010,lpaprocki@hotmail.com,http://www.feltzprintingservice.com
Donette,Foller,Printing Dimensions,34 Center St,Hamilton,Butler,OH,45011,513-570-1893,513-549-4561,donette.foller@cox.net,http://www.printingdimensions.com
Simona,Morasca,\"Chapman, Ross E Esq\",3 Mcauley Dr,Ashland,Ashland,OH,44805,419-503-2484,419-800-6759,simona@morasca.com,http://www.chapmanrosseesq.com
Mitsue,Tollner,Morlong Associates,7 Eads St,Chicago,Cook,IL,60632,773-573-6914,773-924-8565,mitsue_tollner@yahoo.com,http://www.morlongassociates.com
Broken,Row,Too Few Fields,1 Nowhere Rd,Nowhere
Leota,Dilliard,Commercial Press,7 W Jackson Blvd,San Jose,Santa Clara,,95111,,408-813-1105,leota@hotmail.com,http://www.commercialpress.com
";

fn session() -> Session {
    let outcome = outcome_from_text(CSV);
    assert!(!outcome.is_fallback());
    Session::new(outcome)
}

fn renderer() -> Renderer {
    Renderer::new(false, 20).with_width(100)
}

#[test]
fn test_short_rows_are_dropped_and_order_kept() {
    let session = session();
    let records = session.records();

    assert_eq!(records.len(), 6);
    let firsts: Vec<&str> = records
        .records()
        .iter()
        .map(|r| r.get(Field::FirstName))
        .collect();
    assert_eq!(
        firsts,
        ["James", "Lenna", "Donette", "Simona", "Mitsue", "Leota"]
    );
}

#[test]
fn test_state_summary_counts_unknown() {
    let session = session();
    let view = session.view();

    let buckets: Vec<(&str, usize)> = view.aggregate.iter().collect();
    assert_eq!(
        buckets,
        [("LA", 1), ("AK", 1), ("OH", 2), ("IL", 1), ("Unknown", 1)]
    );
    assert_eq!(view.aggregate.total(), 6);
    assert!((view.aggregate.percent(2) - 33.333).abs() < 0.01);

    let text = renderer().badges(&view.aggregate);
    assert!(text.contains("[OH: 33.3%]"));
    assert!(text.contains("[Unknown: 16.7%]"));
}

#[test]
fn test_company_search_narrows_to_card() {
    let mut session = session();
    session.apply(Update::SetField(Field::CompanyName));
    session.apply(Update::SetQuery("printing".to_string()));
    assert_eq!(session.view().visible.len(), 2);
    assert!(session.view().detail().is_table());

    session.apply(Update::SetQuery("DIMENSIONS".to_string()));
    let view = session.view();
    match view.detail() {
        DetailView::Company(record) => assert_eq!(record.get(Field::LastName), "Foller"),
        other => panic!("Expected company card, got {:?}", other),
    }

    let text = renderer().render_view(&view);
    assert!(text.contains("Printing Dimensions\nContact: Donette Foller"));
    assert!(text.contains("Address: 34 Center St, Hamilton, OH 45011"));
}

#[test]
fn test_person_card_uses_second_phone() {
    let session = session().with_settings(
        FilterState::new(Field::FirstName, "leota"),
        Field::City,
        Toggles::default(),
    );
    let view = session.view();

    let text = renderer().render_view(&view);
    assert!(text.starts_with("Distribution by city\n"));
    assert!(text.contains("Leota Dilliard\n"));
    assert!(text.contains("Phone: 408-813-1105"));
}

#[test]
fn test_single_last_name_match_stays_a_table() {
    let mut session = session();
    session.apply(Update::SetField(Field::LastName));
    session.apply(Update::SetQuery("dilli".to_string()));

    let view = session.view();
    assert_eq!(view.visible.len(), 1);
    assert!(view.detail().is_table());
    assert!(renderer()
        .render_view(&view)
        .contains("1 of 6 shown (search by last name)"));
}

#[test]
fn test_no_match_renders_empty_table() {
    let mut session = session();
    session.apply(Update::SetQuery("zz".to_string()));
    session.apply(Update::ToggleChart);
    session.apply(Update::ToggleSummary);

    let text = renderer().render_view(&session.view());
    assert!(text.starts_with("first name"));
    assert!(text.contains("0 of 6 shown (search by state)"));
}

#[tokio::test]
async fn test_browse_script() {
    let mut session = session();
    let renderer = renderer();
    let input: &[u8] = b":field city\nash\n:group county\n:quit\n";
    let mut output = Vec::new();

    run_browser(&mut session, &renderer, input, &mut output)
        .await
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("1 of 6 shown (search by city)"));
    assert!(text.contains("Summary by county"));
    assert!(text.contains("city [ash]> "));
    assert_eq!(session.group_by(), Field::County);
}
