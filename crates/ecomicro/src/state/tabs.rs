/// Tab identifiers for the main flow.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Home,
    Guide,
    Favorites,
    Tips,
}

impl TabId {
    pub const ALL: [TabId; 4] = [TabId::Home, TabId::Guide, TabId::Favorites, TabId::Tips];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Home => "Início",
            TabId::Guide => "Guia de Cultivo",
            TabId::Favorites => "Favoritos",
            TabId::Tips => "Dicas",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Home => 0,
            TabId::Guide => 1,
            TabId::Favorites => 2,
            TabId::Tips => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Home),
            1 => Some(TabId::Guide),
            2 => Some(TabId::Favorites),
            3 => Some(TabId::Tips),
            _ => None,
        }
    }
}
