use slidenav::ViewNode;
use slidenav_ui_graphics::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    MyAccount,
    Messages,
    Chart,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::MyAccount,
        Screen::Messages,
        Screen::Chart,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::MyAccount => "My Account",
            Screen::Messages => "Messages",
            Screen::Chart => "Chart",
        }
    }

    /// Unknown titles open the dashboard.
    pub fn from_title(title: &str) -> Screen {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.title() == title)
            .unwrap_or(Screen::Dashboard)
    }

    pub fn tag(&self) -> String {
        format!("screen:{}", self.title())
    }

    pub fn view(&self, bounds: Rect) -> ViewNode {
        ViewNode::new(self.tag()).with_bounds(bounds)
    }
}

pub const MENU_ITEM_PREFIX: &str = "menu_item:";
const MENU_TOP: f32 = 160.0;
const MENU_ITEM_HEIGHT: f32 = 48.0;
const MENU_ITEM_SPACING: f32 = 16.0;
const MENU_ITEM_WIDTH: f32 = 200.0;

/// Menu listing every screen, laid out top to bottom inside `bounds`.
pub fn menu_view(bounds: Rect) -> ViewNode {
    let mut menu = ViewNode::new("menu").with_bounds(bounds);
    for (index, screen) in Screen::ALL.iter().enumerate() {
        let y = bounds.y + MENU_TOP + index as f32 * (MENU_ITEM_HEIGHT + MENU_ITEM_SPACING);
        let item_bounds = Rect::new(bounds.x + 16.0, y, MENU_ITEM_WIDTH, MENU_ITEM_HEIGHT);
        menu.add_child(
            ViewNode::new(format!("{MENU_ITEM_PREFIX}{}", screen.title())).with_bounds(item_bounds),
        );
    }
    menu
}

/// Screen whose menu item sits under `(x, y)`.
pub fn menu_item_at(menu: &ViewNode, x: f32, y: f32) -> Option<Screen> {
    menu.children()
        .iter()
        .find(|item| item.bounds().contains(x, y))
        .and_then(|item| item.tag().strip_prefix(MENU_ITEM_PREFIX))
        .map(Screen::from_title)
}

/// Center of the menu item for `screen`.
pub fn menu_item_center(menu: &ViewNode, screen: Screen) -> Option<(f32, f32)> {
    let tag = format!("{MENU_ITEM_PREFIX}{}", screen.title());
    menu.find_by_tag(&tag).map(|item| {
        let center = item.bounds().center();
        (center.x, center.y)
    })
}
