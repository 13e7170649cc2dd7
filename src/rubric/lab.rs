#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{Category, Check, Rubric, predicates};

/// Builds the web-lab rubric: three categories of weighted pattern checks
/// over the dashboard lab's files, worth 80 points in total.
///
/// Weights, identifiers, and descriptions mirror the lab handout. The table
/// is immutable once built; construct it once per run.
pub fn web_lab() -> Rubric {
    Rubric::new(vec![
        Category::builder()
            .name("Task 1: Bootstrap Components & Layout")
            .max_points(30.0)
            .checks(vec![
                Check::builder()
                    .id("app-container")
                    .description("App.jsx uses Container tags for header, content, footer")
                    .weight(5.0)
                    .subject("app")
                    .predicate(predicates::app_uses_container)
                    .hint(
                        "In src/App.jsx: wrap header, content and footer in <Container> tags and \
                         import Container from react-bootstrap.",
                    )
                    .build(),
                Check::builder()
                    .id("header-classes")
                    .description(
                        "Header has Bootstrap classes bg-primary text-white py-3 mb-4 shadow, \
                         with h1 class h2 mb-0 and p class mb-0 opacity-75",
                    )
                    .weight(7.0)
                    .subject("app")
                    .predicate(predicates::header_has_bootstrap_classes)
                    .hint(
                        "In src/App.jsx: give the header the classes \"bg-primary text-white \
                         py-3 mb-4 shadow\", the h1 the class \"h2 mb-0\" and the p the class \
                         \"mb-0 opacity-75\".",
                    )
                    .build(),
                Check::builder()
                    .id("searchbar-mb4")
                    .description("SearchBar.jsx root div has mb-4 class")
                    .weight(3.0)
                    .subject("search_bar")
                    .predicate(predicates::search_bar_root_spacing)
                    .build(),
                Check::builder()
                    .id("userlist-grid")
                    .description(
                        "UserList uses Alert variant=\"info\", returns after the no-users \
                         condition, and maps users into Col/UserCard inside a Row",
                    )
                    .weight(7.0)
                    .subject("user_list")
                    .predicate(predicates::user_list_grid)
                    .build(),
                Check::builder()
                    .id("usercard-button")
                    .description(
                        "UserCard uses a Button labelled \"View Details\" whose onClick calls \
                         onUserClick(user)",
                    )
                    .weight(4.0)
                    .subject("user_card")
                    .predicate(predicates::user_card_details_button)
                    .build(),
                Check::builder()
                    .id("usermodal-structure")
                    .description(
                        "UserModal uses Modal with show/onHide, shows the large avatar and user \
                         fields, and closes through a Button",
                    )
                    .weight(4.0)
                    .subject("user_modal")
                    .predicate(predicates::user_modal_structure)
                    .build(),
            ])
            .build(),
        Category::builder()
            .name("Task 2: Custom CSS Styling")
            .max_points(20.0)
            .checks(vec![
                Check::builder()
                    .id("css-root-vars")
                    .description(":root variables for theme colors")
                    .weight(5.0)
                    .subject("index_css")
                    .predicate(predicates::stylesheet_theme_variables)
                    .hint(
                        "In src/Index.css: add the :root variables (--primary-color, \
                         --secondary-color, --light-color, --dark-color).",
                    )
                    .build(),
                Check::builder()
                    .id("css-app")
                    .description(".app background-color and min-height rules")
                    .weight(5.0)
                    .subject("index_css")
                    .predicate(predicates::stylesheet_app_shell)
                    .build(),
                Check::builder()
                    .id("css-user-card")
                    .description(".user-card rules border: none, background-color: white, and a transition")
                    .weight(4.0)
                    .subject("index_css")
                    .predicate(predicates::stylesheet_card_base)
                    .hint(
                        "In src/Index.css: ensure the .user-card rule keeps border: none, \
                         background-color: white, and a transition declaration.",
                    )
                    .build(),
                Check::builder()
                    .id("css-user-card-hover")
                    .description(".user-card:hover transform and box-shadow")
                    .weight(3.0)
                    .subject("index_css")
                    .predicate(predicates::stylesheet_card_hover)
                    .build(),
                Check::builder()
                    .id("css-avatars")
                    .description(".user-avatar and .user-avatar-large rules present")
                    .weight(3.0)
                    .subject("index_css")
                    .predicate(predicates::stylesheet_avatars)
                    .build(),
                Check::builder()
                    .id("css-media-query")
                    .description("responsive media query for .user-avatar at max-width: 768px")
                    .weight(0.0)
                    .subject("index_css")
                    .predicate(predicates::stylesheet_responsive)
                    .build(),
            ])
            .build(),
        Category::builder()
            .name("Task 3: Hooks & Data Fetching")
            .max_points(30.0)
            .checks(vec![
                Check::builder()
                    .id("hooks-import")
                    .description("App.jsx imports useState and useEffect")
                    .weight(3.0)
                    .subject("app")
                    .predicate(predicates::app_imports_hooks)
                    .build(),
                Check::builder()
                    .id("state-vars")
                    .description(
                        "State variables users/filteredUsers/loading/error/searchTerm/showModal/\
                         selectedUser exist",
                    )
                    .weight(7.0)
                    .subject("app")
                    .predicate(predicates::app_state_variables)
                    .build(),
                Check::builder()
                    .id("fetch-effect")
                    .description(
                        "useEffect fetches https://jsonplaceholder.typicode.com/users and sets \
                         state through setUsers and setFilteredUsers",
                    )
                    .weight(8.0)
                    .subject("app")
                    .predicate(predicates::app_fetch_effect)
                    .hint(
                        "In src/App.jsx: add a useEffect that fetches from \
                         https://jsonplaceholder.typicode.com/users and updates setUsers and \
                         setFilteredUsers within try/catch/finally, toggling setLoading around \
                         the request.",
                    )
                    .build(),
                Check::builder()
                    .id("filter-effect")
                    .description("useEffect filters users when searchTerm or users change")
                    .weight(5.0)
                    .subject("app")
                    .predicate(predicates::app_filter_effect)
                    .build(),
                Check::builder()
                    .id("modal-handlers")
                    .description(
                        "handleUserClick and handleCloseModal set the selected user and toggle \
                         the modal",
                    )
                    .weight(4.0)
                    .subject("app")
                    .predicate(predicates::app_modal_handlers)
                    .build(),
                Check::builder()
                    .id("loading-error-render")
                    .description(
                        "loading and error conditional rendering with Spinner and Alert before \
                         the user list",
                    )
                    .weight(3.0)
                    .subject("app")
                    .predicate(predicates::app_loading_error_render)
                    .build(),
                Check::builder()
                    .id("render-components")
                    .description(
                        "Renders UserList with filteredUsers/handleUserClick and UserModal with \
                         showModal/selectedUser",
                    )
                    .weight(0.0)
                    .subject("app")
                    .predicate(predicates::app_renders_components)
                    .build(),
            ])
            .build(),
    ])
}
