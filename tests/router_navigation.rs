use ezroute::{
    Route, RouteParams, Router, RouterError, Screen, ScreenError, ScreenFactory, ScreenHandle,
    ScreenId, ScreenResult,
};
use std::cell::RefCell;
use std::rc::Rc;

struct NullScreen;

impl Screen for NullScreen {}

/// Records every build request so tests can assert what the router handed to
/// the collaborator.
struct RecordingFactory {
    calls: Rc<RefCell<Vec<(String, RouteParams)>>>,
    known: Vec<String>,
}

impl RecordingFactory {
    fn new(known: &[&str]) -> (Self, Rc<RefCell<Vec<(String, RouteParams)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let factory = Self {
            calls: calls.clone(),
            known: known.iter().map(|s| s.to_string()).collect(),
        };
        (factory, calls)
    }
}

impl ScreenFactory for RecordingFactory {
    fn build(&mut self, screen: &ScreenId, params: &RouteParams) -> ScreenResult<ScreenHandle> {
        if !self.known.iter().any(|k| k == screen.as_str()) {
            return Err(ScreenError::UnknownScreen {
                screen: screen.clone(),
            });
        }

        self.calls
            .borrow_mut()
            .push((screen.as_str().to_string(), params.clone()));
        Ok(Rc::new(RefCell::new(NullScreen)))
    }
}

fn router(known_screens: &[&str]) -> (Router, Rc<RefCell<Vec<(String, RouteParams)>>>) {
    let (factory, calls) = RecordingFactory::new(known_screens);
    (Router::new(Box::new(factory)), calls)
}

fn route(path: &str, name: &str) -> Route {
    Route::with_name(path, ScreenId::from(name), name).expect("route should build")
}

#[test]
fn install_route_when_tree_composed_then_children_install_recursively() {
    let (router, _) = router(&["home", "profile", "profile-detail"]);

    router.install_route(route("/home", "home")).expect("home");

    let mut profile = route("/profile", "profile");
    profile
        .add_child(route("/:id", "profile-detail"))
        .expect("composition");
    router.install_route(profile).expect("profile tree");

    assert_eq!(router.route_count(), 3);
}

#[test]
fn install_route_when_name_duplicated_then_error() {
    let (router, _) = router(&["home"]);
    router.install_route(route("/home", "home")).expect("home");

    let err = router
        .install_route(route("/start", "home"))
        .expect_err("expected duplicate");

    assert!(matches!(&err, RouterError::Registry(_)), "got {err:?}");
    assert_eq!(router.route_count(), 1);
}

#[test]
fn go_by_path_when_route_tree_installed_then_end_to_end_navigation_works() {
    let (router, calls) = router(&["home", "profile", "profile-detail"]);

    router.install_route(route("/home", "home")).expect("home");
    let mut profile = route("/profile", "profile");
    profile
        .add_child(route("/:id", "profile-detail"))
        .expect("composition");
    router.install_route(profile).expect("profile tree");

    router
        .go_by_path("/profile/42")
        .expect("navigation should succeed");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "profile-detail");
    assert_eq!(calls[0].1.get("id").map(String::as_str), Some("42"));

    let history = router.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].name(), "profile-detail");
    assert_eq!(history[0].path(), "/profile/:id");
}

#[test]
fn go_by_name_when_route_installed_then_params_forwarded_verbatim() {
    let (router, calls) = router(&["profile-detail"]);
    router
        .install_route(route("/profile/:id", "profile-detail"))
        .expect("install");

    let params = RouteParams::from([("id".to_string(), "7".to_string())]);
    router
        .go_by_name("profile-detail", &params)
        .expect("navigation should succeed");

    assert_eq!(calls.borrow()[0].1, params);
}

#[test]
fn go_by_name_when_name_unknown_then_not_found_and_history_untouched() {
    let (router, _) = router(&[]);

    let err = router
        .go_by_name("nowhere", &RouteParams::new())
        .err()
        .expect("expected not found");

    match err {
        RouterError::NameNotFound { name } => assert_eq!(name, "nowhere"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(router.history().is_empty());
}

#[test]
fn go_by_path_when_nothing_matches_then_not_found_and_history_untouched() {
    let (router, _) = router(&["home"]);
    router.install_route(route("/home", "home")).expect("home");
    router.go_by_path("/home").expect("first navigation");

    let err = router
        .go_by_path("/hoem")
        .err()
        .expect("expected not found");

    match err {
        RouterError::PathNotFound { path } => assert_eq!(path, "/hoem"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(router.history().len(), 1);
}

#[test]
fn go_by_path_when_screen_build_fails_then_history_untouched() {
    let (router, _) = router(&[]);
    router
        .install_route(route("/broken", "broken"))
        .expect("install");

    let err = router
        .go_by_path("/broken")
        .err()
        .expect("expected screen error");

    assert!(matches!(&err, RouterError::Screen(_)), "got {err:?}");
    assert!(router.history().is_empty());
}

#[test]
fn history_when_navigating_and_going_back_then_stack_behaves() {
    let (router, _) = router(&["home", "about"]);
    router.install_route(route("/home", "home")).expect("home");
    router
        .install_route(route("/about", "about"))
        .expect("about");

    router.go_by_path("/home").expect("navigate home");
    router.go_by_path("/about").expect("navigate about");

    let history = router.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history.last().map(|r| r.name()), Some("about"));

    let back = router.go_back().expect("should step back");
    assert_eq!(back.name(), "home");
    assert_eq!(router.history().len(), 1);

    assert!(router.go_back().is_none());
    assert_eq!(router.history().len(), 1);
}

#[test]
fn go_back_when_history_empty_then_none() {
    let (router, _) = router(&[]);
    assert!(router.go_back().is_none());
}

#[test]
fn clear_history_when_called_then_stack_is_empty() {
    let (router, _) = router(&["home"]);
    router.install_route(route("/home", "home")).expect("home");
    router.go_by_path("/home").expect("navigate");
    router.go_by_path("/home").expect("revisit");

    assert_eq!(router.history().len(), 2);
    router.clear_history();
    assert!(router.history().is_empty());
}

#[test]
fn history_when_same_route_revisited_then_duplicates_are_kept() {
    let (router, _) = router(&["home"]);
    router.install_route(route("/home", "home")).expect("home");

    router.go_by_path("/home").expect("first visit");
    router.go_by_path("/home").expect("second visit");

    let history = router.history();
    assert_eq!(history.len(), 2);
    assert!(std::sync::Arc::ptr_eq(&history[0], &history[1]));
}
