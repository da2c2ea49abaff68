use crate::content::FOOTER_COLUMNS;
use crate::routes::Route;

#[test]
fn routes_render_their_paths() {
    assert_eq!(Route::Home.to_string(), "/");
    assert_eq!(Route::Features.to_string(), "/features");
    assert_eq!(Route::Pricing.to_string(), "/pricing");
    assert_eq!(
        Route::BlogPost {
            slug: "ending-the-spreadsheet-era".to_string()
        }
        .to_string(),
        "/blog/ending-the-spreadsheet-era"
    );
}

#[test]
fn paths_parse_back_to_their_routes() {
    assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
    assert_eq!("/pricing".parse::<Route>().unwrap(), Route::Pricing);
    assert_eq!(
        "/blog/attendance-patterns-worth-watching"
            .parse::<Route>()
            .unwrap(),
        Route::BlogPost {
            slug: "attendance-patterns-worth-watching".to_string()
        }
    );
}

#[test]
fn unknown_paths_fall_through_to_the_catch_all() {
    let parsed = "/no/such/page".parse::<Route>().unwrap();
    assert!(matches!(parsed, Route::PageNotFound { .. }));
}

#[test]
fn footer_links_point_at_real_routes() {
    for column in FOOTER_COLUMNS {
        for link in column.links {
            let parsed = link.href.parse::<Route>().unwrap();
            assert!(
                !matches!(parsed, Route::PageNotFound { .. }),
                "footer link {} does not resolve to a page",
                link.href
            );
        }
    }
}
