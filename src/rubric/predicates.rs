#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::LazyLock;

use regex::Regex;

use crate::artifacts::{Artifact, ArtifactSet};

/// Compiles a rubric pattern, panicking only on a malformed literal.
fn pattern(p: &str) -> Regex {
    Regex::new(p).expect("rubric pattern is valid")
}

/// True when the artifact is present and contains `needle`.
fn text_has(artifact: &Artifact, needle: &str) -> bool {
    artifact.text().is_some_and(|t| t.contains(needle))
}

/// True when the artifact is present and contains every needle.
fn text_has_all(artifact: &Artifact, needles: &[&str]) -> bool {
    artifact
        .text()
        .is_some_and(|t| needles.iter().all(|n| t.contains(n)))
}

/// True when the artifact is present and the pattern matches it.
fn text_matches(artifact: &Artifact, re: &Regex) -> bool {
    artifact.text().is_some_and(|t| re.is_match(t))
}

/// `<Container` as a JSX tag.
static RE_CONTAINER_TAG: LazyLock<Regex> = LazyLock::new(|| pattern(r"<Container\b"));
/// `Container` imported from react-bootstrap.
static RE_CONTAINER_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r#"import\s+\{[^}]*Container[^}]*\}\s+from\s+['"]react-bootstrap['"]"#)
});
/// Any `className` attribute carrying `mb-4`.
static RE_CLASS_MB4: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"className\s*=\s*["'][^"']*mb-4[^"']*["']"#));
/// `variant="info"` attribute.
static RE_ALERT_INFO: LazyLock<Regex> = LazyLock::new(|| pattern(r#"variant\s*=\s*["']info["']"#));
/// `<Row` as a JSX tag.
static RE_ROW_TAG: LazyLock<Regex> = LazyLock::new(|| pattern(r"<Row\b"));
/// `<Col` as a JSX tag.
static RE_COL_TAG: LazyLock<Regex> = LazyLock::new(|| pattern(r"<Col\b"));
/// A call mapping over the users collection.
static RE_USERS_MAP: LazyLock<Regex> = LazyLock::new(|| pattern(r"users\.map\s*\("));
/// A `UserCard` element receiving a `user` prop.
static RE_CARD_IN_LIST: LazyLock<Regex> = LazyLock::new(|| pattern(r"<UserCard\s+user="));
/// Any `return` statement.
static RE_RETURN: LazyLock<Regex> = LazyLock::new(|| pattern(r"\breturn\b"));
/// Card button click forwarding the card's user.
static RE_CARD_CLICK: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"onClick\s*=\s*\{\s*\(\)\s*=>\s*onUserClick\(\s*user\s*\)\s*\}"));
/// `<Modal` carrying both `show={show}` and `onHide={onHide}`.
static RE_MODAL_PROPS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"<Modal\b[^>]*show\s*=\s*\{show\}[^>]*onHide\s*=\s*\{onHide\}"));
/// A modal title reading "User Details".
static RE_MODAL_TITLE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"<Modal\.Title>.*User Details.*</Modal\.Title>"));
/// A close handler wired to `onHide`.
static RE_MODAL_CLOSE: LazyLock<Regex> = LazyLock::new(|| pattern(r"onClick\s*=\s*\{onHide\}"));

/// `.app` rule with the light background variable and full viewport height.
static RE_APP_SHELL: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"\.app\b[^}]*\{[^}]*var\(--light-color\)[^}]*min-height\s*:\s*100vh[^}]*\}")
});
/// `.user-card` rule with border, background, and transition declarations.
static RE_CARD_BASE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"\.user-card\b[^}]*\{[^}]*border\s*:\s*none[^}]*background-color\s*:\s*white[^}]*transition\s*:",
    )
});
/// `.user-card:hover` rule with the lift transform and shadow.
static RE_CARD_HOVER: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"\.user-card:hover\b[^}]*\{[^}]*transform\s*:\s*translateY\(-?2px\)[^}]*box-shadow\s*:\s*0\s*4px\s*8px\s*rgba\(\s*0\s*,\s*0\s*,\s*0\s*,\s*0\.15\s*\)",
    )
});
/// `.user-avatar` selector.
static RE_AVATAR: LazyLock<Regex> = LazyLock::new(|| pattern(r"\.user-avatar\b"));
/// `.user-avatar-large` selector.
static RE_AVATAR_LARGE: LazyLock<Regex> = LazyLock::new(|| pattern(r"\.user-avatar-large\b"));
/// Media query at 768px touching the avatar class.
static RE_MEDIA_AVATAR: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?s)@media\s*\(\s*max-width\s*:\s*768px\s*\).*\.user-avatar"));

/// `useState` and `useEffect` named next to each other.
static RE_HOOKS_PAIR: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"useState[\s,]*useEffect|useEffect[\s,]*useState"));
/// A braces import naming `useState`.
static RE_HOOKS_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"import\s+\{[^}]*useState[^}]*\}"));
/// An effect taking an arrow callback.
static RE_EFFECT_ARROW: LazyLock<Regex> = LazyLock::new(|| pattern(r"useEffect\s*\(\s*\(\)\s*=>"));
/// An effect taking an async callback.
static RE_EFFECT_ASYNC: LazyLock<Regex> = LazyLock::new(|| pattern(r"useEffect\s*\(\s*\(\s*async"));
/// An effect body referring to the search term or the users collection.
static RE_FILTER_EFFECT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?s)useEffect\s*\(\s*\(\)\s*=>.*(searchTerm|users).*\)"));
/// `handleUserClick` declared as a function or a binding.
static RE_CLICK_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"function\s+handleUserClick|const\s+handleUserClick\s*="));
/// `<Alert` as a JSX tag.
static RE_ALERT_TAG: LazyLock<Regex> = LazyLock::new(|| pattern(r"<Alert\b"));
/// `UserList` wired to the filtered users and the click handler.
static RE_LIST_WIRING: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"<UserList\b[^>]*users\s*=\s*\{filteredUsers\}[^>]*onUserClick\s*=\s*\{handleUserClick\}",
    )
});
/// `UserModal` wired to the modal flag and the selected user.
static RE_MODAL_WIRING: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"<UserModal\b[^>]*show\s*=\s*\{showModal\}[^>]*user\s*=\s*\{selectedUser\}")
});

/// State bindings the hooks task requires, each as `const [name,`.
static RE_STATE_VARS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        "users",
        "filteredUsers",
        "loading",
        "error",
        "searchTerm",
        "showModal",
        "selectedUser",
    ]
    .iter()
    .map(|name| pattern(&format!(r"const\s+\[\s*{name}\s*,")))
    .collect()
});

/// The app entry file uses `Container` layout tags or imports them.
pub fn app_uses_container(a: &ArtifactSet) -> bool {
    text_matches(a.app(), &RE_CONTAINER_TAG) || text_matches(a.app(), &RE_CONTAINER_IMPORT)
}

/// The header carries the required class cluster, including the heading and
/// subtitle classes.
pub fn header_has_bootstrap_classes(a: &ArtifactSet) -> bool {
    text_has_all(
        a.app(),
        &[
            "bg-primary",
            "text-white",
            "py-3",
            "mb-4",
            "shadow",
            "h2 mb-0",
            "mb-0 opacity-75",
        ],
    )
}

/// The search bar root div carries the `mb-4` spacing class.
pub fn search_bar_root_spacing(a: &ArtifactSet) -> bool {
    text_matches(a.search_bar(), &RE_CLASS_MB4)
}

/// The user list renders an info alert for the empty case and maps users
/// into columns of cards inside a row.
pub fn user_list_grid(a: &ArtifactSet) -> bool {
    let list = a.user_list();
    text_has(list, "Alert")
        && text_matches(list, &RE_ALERT_INFO)
        && text_matches(list, &RE_ROW_TAG)
        && text_matches(list, &RE_COL_TAG)
        && text_matches(list, &RE_USERS_MAP)
        && text_matches(list, &RE_CARD_IN_LIST)
        && text_matches(list, &RE_RETURN)
}

/// The card shows a "View Details" button forwarding its user on click.
pub fn user_card_details_button(a: &ArtifactSet) -> bool {
    text_has(a.user_card(), "View Details") && text_matches(a.user_card(), &RE_CARD_CLICK)
}

/// The modal is wired through `show`/`onHide`, titled, shows the large
/// avatar, and closes through a button.
pub fn user_modal_structure(a: &ArtifactSet) -> bool {
    let modal = a.user_modal();
    text_matches(modal, &RE_MODAL_PROPS)
        && text_has(modal, "user-avatar-large")
        && text_matches(modal, &RE_MODAL_TITLE)
        && text_has(modal, "<Button")
        && text_matches(modal, &RE_MODAL_CLOSE)
}

/// The stylesheet declares the four `:root` theme variables.
pub fn stylesheet_theme_variables(a: &ArtifactSet) -> bool {
    text_has_all(
        a.index_css(),
        &[
            "--primary-color: #0d6efd",
            "--secondary-color: #6c757d",
            "--light-color: #f8f9fa",
            "--dark-color: #212529",
        ],
    )
}

/// The `.app` shell uses the light background variable and fills the
/// viewport.
pub fn stylesheet_app_shell(a: &ArtifactSet) -> bool {
    text_matches(a.index_css(), &RE_APP_SHELL)
}

/// The `.user-card` base rule strips the border, sets a white background,
/// and declares a transition.
pub fn stylesheet_card_base(a: &ArtifactSet) -> bool {
    text_matches(a.index_css(), &RE_CARD_BASE)
}

/// The `.user-card:hover` rule lifts the card and casts the shadow.
pub fn stylesheet_card_hover(a: &ArtifactSet) -> bool {
    text_matches(a.index_css(), &RE_CARD_HOVER)
}

/// Both avatar classes exist with circular shape and the large font size.
pub fn stylesheet_avatars(a: &ArtifactSet) -> bool {
    let css = a.index_css();
    text_matches(css, &RE_AVATAR)
        && text_matches(css, &RE_AVATAR_LARGE)
        && text_has(css, "border-radius: 50%")
        && text_has(css, "font-size: 2rem")
}

/// A 768px media query restyles the avatar.
pub fn stylesheet_responsive(a: &ArtifactSet) -> bool {
    text_matches(a.index_css(), &RE_MEDIA_AVATAR)
}

/// The app entry file imports both state and effect hooks.
pub fn app_imports_hooks(a: &ArtifactSet) -> bool {
    text_matches(a.app(), &RE_HOOKS_PAIR) || text_matches(a.app(), &RE_HOOKS_IMPORT)
}

/// All seven state bindings exist.
pub fn app_state_variables(a: &ArtifactSet) -> bool {
    a.app()
        .text()
        .is_some_and(|t| RE_STATE_VARS.iter().all(|re| re.is_match(t)))
}

/// An effect fetches the users endpoint and stores both user collections.
pub fn app_fetch_effect(a: &ArtifactSet) -> bool {
    let app = a.app();
    (text_matches(app, &RE_EFFECT_ARROW) || text_matches(app, &RE_EFFECT_ASYNC))
        && text_has(app, "jsonplaceholder.typicode.com/users")
        && text_has(app, "setUsers(")
        && text_has(app, "setFilteredUsers(")
}

/// An effect refilters users when the search term or the collection change.
pub fn app_filter_effect(a: &ArtifactSet) -> bool {
    text_matches(a.app(), &RE_FILTER_EFFECT) && text_has(a.app(), "setFilteredUsers(")
}

/// Modal open/close handlers select a user and toggle visibility.
pub fn app_modal_handlers(a: &ArtifactSet) -> bool {
    let app = a.app();
    text_matches(app, &RE_CLICK_HANDLER)
        && (text_has(app, "setSelectedUser(") || text_has(app, "setShowModal("))
        && text_has(app, "handleCloseModal")
}

/// Loading and error states render a spinner and an alert.
pub fn app_loading_error_render(a: &ArtifactSet) -> bool {
    text_has(a.app(), "Spinner")
        && text_matches(a.app(), &RE_ALERT_TAG)
        && text_has(a.app(), "loading")
}

/// The list and modal are wired to the filtered users, the handlers, and
/// the selected user.
pub fn app_renders_components(a: &ArtifactSet) -> bool {
    text_matches(a.app(), &RE_LIST_WIRING) && text_matches(a.app(), &RE_MODAL_WIRING)
}
