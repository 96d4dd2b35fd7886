//! Static tips library content.

/// Tip categories, used as filter chips on the tips screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipCategory {
    Watering,
    Light,
    Pests,
    Nutrients,
    Hygiene,
    Timing,
    Advanced,
}

impl TipCategory {
    pub const ALL: [TipCategory; 7] = [
        TipCategory::Watering,
        TipCategory::Light,
        TipCategory::Pests,
        TipCategory::Nutrients,
        TipCategory::Hygiene,
        TipCategory::Timing,
        TipCategory::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TipCategory::Watering => "Regas",
            TipCategory::Light => "Iluminação",
            TipCategory::Pests => "Pragas",
            TipCategory::Nutrients => "Nutrientes",
            TipCategory::Hygiene => "Higiene",
            TipCategory::Timing => "Tempo de cultivo",
            TipCategory::Advanced => "Dicas avançadas",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            TipCategory::Watering => "💧",
            TipCategory::Light => "☀️",
            TipCategory::Pests => "🐛",
            TipCategory::Nutrients => "🧪",
            TipCategory::Hygiene => "🧼",
            TipCategory::Timing => "⏳",
            TipCategory::Advanced => "🌈",
        }
    }
}

/// One entry in the tips library.
#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub id: &'static str,
    pub category: TipCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub bonus_tip: &'static str,
    pub related_species: &'static [&'static str],
}

/// Highlighted tip shown in the "Dica do Dia" block.
pub const TIP_OF_THE_DAY: &str = "Evite regar no final da tarde — isso pode favorecer fungos!";

pub static TIPS: &[Tip] = &[
    Tip {
        id: "tip1",
        category: TipCategory::Watering,
        title: "Como saber a hora certa de regar seus microverdes",
        description: "Observe o substrato: se estiver seco ao toque, regue.",
        full_description: "Regue pela manhã para evitar fungos. Use um borrifador para não deslocar as sementes nem encharcar o substrato.",
        bonus_tip: "Evite regar em excesso, o encharcamento favorece o aparecimento de fungos.",
        related_species: &["rabanete-roxo", "brocolis"],
    },
    Tip {
        id: "tip2",
        category: TipCategory::Light,
        title: "A importância da luz solar para o crescimento",
        description: "Microverdes precisam de luz para fotossíntese.",
        full_description: "A luz ideal é indireta. Evite exposição direta ao sol forte, que queima as folhas jovens.",
        bonus_tip: "Use luz artificial se não houver luz natural suficiente.",
        related_species: &["alfafa", "girassol"],
    },
    Tip {
        id: "tip3",
        category: TipCategory::Pests,
        title: "Como identificar e combater pulgões",
        description: "Pulgões são pequenos insetos que se alimentam da seiva.",
        full_description: "Lave as folhas com água e sabão neutro. Use óleo de neem nos casos persistentes.",
        bonus_tip: "Inspecione regularmente as folhas para detectar pragas.",
        related_species: &["mostarda", "rucula"],
    },
    Tip {
        id: "tip4",
        category: TipCategory::Nutrients,
        title: "A importância dos nutrientes no substrato",
        description: "Nutrientes essenciais para o crescimento saudável.",
        full_description: "Use substrato rico em matéria orgânica. Adicione fertilizantes naturais com moderação.",
        bonus_tip: "Evite o excesso de fertilizantes, pode prejudicar o crescimento.",
        related_species: &["ervilha", "couve"],
    },
    Tip {
        id: "tip5",
        category: TipCategory::Hygiene,
        title: "A importância da higiene no cultivo",
        description: "A higiene é fundamental para evitar doenças.",
        full_description: "Lave bem as mãos antes de manusear as sementes. Limpe os recipientes entre cultivos.",
        bonus_tip: "Use água filtrada para evitar contaminação.",
        related_species: &["beterraba", "manjericao"],
    },
    Tip {
        id: "tip6",
        category: TipCategory::Timing,
        title: "Como otimizar o tempo de cultivo",
        description: "O tempo de cultivo varia de acordo com a espécie.",
        full_description: "Escolha espécies com tempo de cultivo curto. Use técnicas de germinação no escuro para acelerar o início.",
        bonus_tip: "Monitore a temperatura e a umidade para acelerar o crescimento.",
        related_species: &["mostarda", "rucula"],
    },
    Tip {
        id: "tip7",
        category: TipCategory::Advanced,
        title: "Técnicas avançadas de cultivo",
        description: "Aprenda técnicas avançadas para aumentar a produtividade.",
        full_description: "Use hidroponia. Faça aeração do substrato e rotacione bandejas para colheitas contínuas.",
        bonus_tip: "Registre cada cultivo para comparar resultados entre ciclos.",
        related_species: &["ervilha", "couve"],
    },
];

/// Narrow the library by category chip and title search, both optional.
pub fn filter_tips(category: Option<TipCategory>, query: &str) -> Vec<&'static Tip> {
    let query_lower = query.to_lowercase();
    TIPS.iter()
        .filter(|tip| category.is_none_or(|c| tip.category == c))
        .filter(|tip| query.is_empty() || tip.title.to_lowercase().contains(&query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_returns_everything() {
        assert_eq!(filter_tips(None, "").len(), TIPS.len());
    }

    #[test]
    fn test_category_filter() {
        let result = filter_tips(Some(TipCategory::Watering), "");
        assert!(!result.is_empty());
        assert!(result.iter().all(|t| t.category == TipCategory::Watering));
    }

    #[test]
    fn test_title_search_is_case_insensitive() {
        let result = filter_tips(None, "PULGÕES");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "tip3");
    }

    #[test]
    fn test_unmatched_search_is_empty() {
        assert!(filter_tips(None, "hidroponia subaquática").is_empty());
    }

    #[test]
    fn test_category_and_search_combine() {
        assert!(filter_tips(Some(TipCategory::Light), "pulgões").is_empty());
    }

    #[test]
    fn test_tip_ids_are_unique() {
        let mut ids: Vec<&str> = TIPS.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TIPS.len());
    }
}
