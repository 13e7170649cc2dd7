use tally::{artifacts::ArtifactSet, rubric::predicates};

fn with_app(text: impl Into<String>) -> ArtifactSet {
    ArtifactSet::absent().with_app(text)
}

fn with_css(text: impl Into<String>) -> ArtifactSet {
    ArtifactSet::absent().with_index_css(text)
}

#[test]
fn every_predicate_is_false_on_an_absent_set() {
    let absent = ArtifactSet::absent();
    let all_predicates: &[fn(&ArtifactSet) -> bool] = &[
        predicates::app_uses_container,
        predicates::header_has_bootstrap_classes,
        predicates::search_bar_root_spacing,
        predicates::user_list_grid,
        predicates::user_card_details_button,
        predicates::user_modal_structure,
        predicates::stylesheet_theme_variables,
        predicates::stylesheet_app_shell,
        predicates::stylesheet_card_base,
        predicates::stylesheet_card_hover,
        predicates::stylesheet_avatars,
        predicates::stylesheet_responsive,
        predicates::app_imports_hooks,
        predicates::app_state_variables,
        predicates::app_fetch_effect,
        predicates::app_filter_effect,
        predicates::app_modal_handlers,
        predicates::app_loading_error_render,
        predicates::app_renders_components,
    ];

    for predicate in all_predicates {
        assert!(!predicate(&absent), "predicate passed on absent artifacts");
    }
}

#[test]
fn container_accepts_tag_or_import() {
    assert!(predicates::app_uses_container(&with_app("<Container fluid>")));
    assert!(predicates::app_uses_container(&with_app(
        "import { Container, Alert } from 'react-bootstrap'"
    )));
    assert!(!predicates::app_uses_container(&with_app(
        "import { Row } from 'react-bootstrap'"
    )));
}

#[test]
fn header_requires_the_whole_class_cluster() {
    let complete = "<header className=\"bg-primary text-white py-3 mb-4 shadow\">\
                    <h1 className=\"h2 mb-0\"></h1><p className=\"mb-0 opacity-75\"></p>";
    assert!(predicates::header_has_bootstrap_classes(&with_app(complete)));

    let missing_subtitle = "<header className=\"bg-primary text-white py-3 mb-4 shadow\">\
                            <h1 className=\"h2 mb-0\"></h1>";
    assert!(!predicates::header_has_bootstrap_classes(&with_app(missing_subtitle)));
}

#[test]
fn search_bar_spacing_looks_inside_class_names() {
    let set = ArtifactSet::absent().with_search_bar("<div className=\"search-bar mb-4\">");
    assert!(predicates::search_bar_root_spacing(&set));

    // mb-4 outside a className attribute does not count
    let set = ArtifactSet::absent().with_search_bar("// remember to add mb-4");
    assert!(!predicates::search_bar_root_spacing(&set));
}

#[test]
fn user_list_grid_needs_every_structural_piece() {
    let complete = r#"
        if (users.length === 0) {
          return <Alert variant="info">No users found.</Alert>
        }
        return (
          <Row>
            {users.map((user) => (
              <Col key={user.id}><UserCard user={user} /></Col>
            ))}
          </Row>
        )
    "#;
    let set = ArtifactSet::absent().with_user_list(complete);
    assert!(predicates::user_list_grid(&set));

    let no_alert = complete.replace("Alert", "Banner");
    let set = ArtifactSet::absent().with_user_list(no_alert);
    assert!(!predicates::user_list_grid(&set));
}

#[test]
fn card_button_must_forward_its_user() {
    let set = ArtifactSet::absent()
        .with_user_card("<Button onClick={() => onUserClick(user)}>View Details</Button>");
    assert!(predicates::user_card_details_button(&set));

    let set = ArtifactSet::absent()
        .with_user_card("<Button onClick={openModal}>View Details</Button>");
    assert!(!predicates::user_card_details_button(&set));
}

#[test]
fn modal_props_must_share_one_tag() {
    let wired = r#"
        <Modal show={show} onHide={onHide}>
          <Modal.Title>User Details</Modal.Title>
          <div className="user-avatar-large"></div>
          <Button onClick={onHide}>Close</Button>
        </Modal>
    "#;
    let set = ArtifactSet::absent().with_user_modal(wired);
    assert!(predicates::user_modal_structure(&set));

    // show and onHide on different elements do not satisfy the structure
    let split = wired.replace("show={show} onHide={onHide}", "show={show}><Modal onHide={onHide}");
    let set = ArtifactSet::absent().with_user_modal(split);
    assert!(!predicates::user_modal_structure(&set));
}

#[test]
fn theme_variables_require_all_four_colors() {
    let css = ":root { --primary-color: #0d6efd; --secondary-color: #6c757d; \
               --light-color: #f8f9fa; --dark-color: #212529; }";
    assert!(predicates::stylesheet_theme_variables(&with_css(css)));

    let three = ":root { --primary-color: #0d6efd; --secondary-color: #6c757d; \
                 --light-color: #f8f9fa; }";
    assert!(!predicates::stylesheet_theme_variables(&with_css(three)));
}

#[test]
fn app_shell_rule_must_stay_in_one_block() {
    let css = ".app { background-color: var(--light-color); min-height: 100vh; }";
    assert!(predicates::stylesheet_app_shell(&with_css(css)));

    // the two declarations split across rules do not count
    let split = ".app { background-color: var(--light-color); } .page { min-height: 100vh; }";
    assert!(!predicates::stylesheet_app_shell(&with_css(split)));
}

#[test]
fn card_hover_requires_lift_and_shadow() {
    let css = ".user-card:hover { transform: translateY(-2px); \
               box-shadow: 0 4px 8px rgba(0, 0, 0, 0.15); }";
    assert!(predicates::stylesheet_card_hover(&with_css(css)));

    let no_shadow = ".user-card:hover { transform: translateY(-2px); }";
    assert!(!predicates::stylesheet_card_hover(&with_css(no_shadow)));
}

#[test]
fn responsive_query_is_informational_but_detected() {
    let css = "@media (max-width: 768px) {\n  .user-avatar { width: 50px; }\n}";
    assert!(predicates::stylesheet_responsive(&with_css(css)));
    assert!(!predicates::stylesheet_responsive(&with_css(".user-avatar { width: 50px; }")));
}

#[test]
fn state_variables_need_all_seven_bindings() {
    let complete = r#"
        const [users, setUsers] = useState([])
        const [filteredUsers, setFilteredUsers] = useState([])
        const [loading, setLoading] = useState(true)
        const [error, setError] = useState(null)
        const [searchTerm, setSearchTerm] = useState('')
        const [showModal, setShowModal] = useState(false)
        const [selectedUser, setSelectedUser] = useState(null)
    "#;
    assert!(predicates::app_state_variables(&with_app(complete)));

    let missing_one = complete.replace("const [selectedUser, setSelectedUser] = useState(null)", "");
    assert!(!predicates::app_state_variables(&with_app(missing_one)));
}

#[test]
fn fetch_effect_requires_endpoint_and_both_setters() {
    let complete = r#"
        useEffect(() => {
          fetch('https://jsonplaceholder.typicode.com/users')
            .then((data) => { setUsers(data); setFilteredUsers(data) })
        }, [])
    "#;
    assert!(predicates::app_fetch_effect(&with_app(complete)));

    let wrong_endpoint = complete.replace("jsonplaceholder.typicode.com/users", "example.com/users");
    assert!(!predicates::app_fetch_effect(&with_app(wrong_endpoint)));
}

#[test]
fn component_wiring_checks_both_elements() {
    let wired = "<UserList users={filteredUsers} onUserClick={handleUserClick} />\n\
                 <UserModal show={showModal} user={selectedUser} onHide={handleCloseModal} />";
    assert!(predicates::app_renders_components(&with_app(wired)));

    let list_only = "<UserList users={filteredUsers} onUserClick={handleUserClick} />";
    assert!(!predicates::app_renders_components(&with_app(list_only)));
}
