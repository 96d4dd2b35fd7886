//! Static species catalog.
//!
//! The catalog is the single source of truth for everything the app can
//! display. It is defined at build time and immutable for the session;
//! persisted user state (favorites, progress) only ever references it by id.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::species::DayMarker::{Day, Range};
use crate::species::{
    DayMarker, Difficulty, DifficultyLevel, Light, Species, StepIcon, TimelineStep,
};

const fn step(
    day: DayMarker,
    title: &'static str,
    icon: StepIcon,
    description: &'static str,
) -> TimelineStep {
    TimelineStep {
        day,
        title,
        icon,
        description,
        details: None,
        image: None,
    }
}

/// The full, ordered species catalog.
pub static SPECIES: &[Species] = &[
    Species {
        id: "rabanete-roxo",
        name: "Rabanete Roxo",
        image: "https://images.unsplash.com/photo-1629087140320-4a7f07a1f0c1",
        cultivation_time: "5 dias",
        cultivation_days: 5,
        light: Light::Indirect,
        watering: "2x por dia",
        difficulty: Difficulty::Easy,
        difficulty_level: DifficultyLevel::Beginner,
        benefits: &["Detox", "Imunidade"],
        flavor: Some("Levemente picante, fonte de antioxidantes."),
        video: None,
        timeline: &[
            TimelineStep {
                day: Day(1),
                title: "Hidratação",
                icon: StepIcon::Droplets,
                description: "Deixe as sementes de molho por 6-8 horas.",
                details: Some("Use água filtrada. Recipiente de vidro com voal/gaze."),
                image: Some("https://via.placeholder.com/100x80?text=Hidratar"),
            },
            TimelineStep {
                day: Day(2),
                title: "Drenagem + Escuro",
                icon: StepIcon::Moon,
                description: "Escorra bem. Mantenha coberto e úmido por 24h.",
                details: Some("Use um pano escuro e úmido."),
                image: Some("https://via.placeholder.com/100x80?text=Drenar"),
            },
            TimelineStep {
                day: Day(3),
                title: "Germinação",
                icon: StepIcon::Sprout,
                description: "Brotos surgem. Mantenha úmido, sem luz direta.",
                details: None,
                image: Some("https://via.placeholder.com/100x80?text=Germinar"),
            },
            TimelineStep {
                day: Day(4),
                title: "Luz Suave",
                icon: StepIcon::Sun,
                description: "Leve para luz indireta. Borrife água 2x ao dia.",
                details: None,
                image: Some("https://via.placeholder.com/100x80?text=Luz"),
            },
            TimelineStep {
                day: Day(5),
                title: "Colheita",
                icon: StepIcon::Scissors,
                description: "Com 5-7cm, corte rente à base.",
                details: Some("Consuma fresco!"),
                image: Some("https://via.placeholder.com/100x80?text=Colher"),
            },
        ],
    },
    Species {
        id: "brocolis",
        name: "Brócolis",
        image: "https://images.unsplash.com/photo-1628773822503-930a7eaecf80",
        cultivation_time: "7 dias",
        cultivation_days: 7,
        light: Light::Indirect,
        watering: "1-2x por dia",
        difficulty: Difficulty::Easy,
        difficulty_level: DifficultyLevel::Beginner,
        benefits: &["Detox", "Imunidade"],
        flavor: Some("Suave, alto teor de fibras e sulforafano."),
        video: None,
        timeline: &[
            step(Day(1), "Semeadura", StepIcon::Sprout, "Distribua as sementes sobre o substrato úmido."),
            step(Day(2), "Escuro", StepIcon::Moon, "Cubra a bandeja e mantenha no escuro."),
            step(Range("3-4"), "Germinação", StepIcon::Droplets, "Borrife água 1-2x ao dia, ainda coberto."),
            step(Range("5-6"), "Luz Indireta", StepIcon::Sun, "Descubra e leve para luz indireta."),
            step(Day(7), "Colheita", StepIcon::Scissors, "Corte quando as folhas abrirem por completo."),
        ],
    },
    Species {
        id: "mostarda",
        name: "Mostarda",
        image: "https://images.unsplash.com/photo-1589137201472-eb691e5b997c",
        cultivation_time: "6 dias",
        cultivation_days: 6,
        light: Light::FullOrIndirect,
        watering: "2x por dia",
        difficulty: Difficulty::Easy,
        difficulty_level: DifficultyLevel::Beginner,
        benefits: &["Energia", "Foco"],
        flavor: Some("Sabor picante, lembra wasabi quando madura."),
        video: None,
        timeline: &[
            step(Day(1), "Semeadura", StepIcon::Sprout, "Espalhe as sementes sem sobrepor."),
            step(Range("2-3"), "Escuro + Umidade", StepIcon::Moon, "Mantenha coberto, borrifando 2x ao dia."),
            step(Range("4-5"), "Luz", StepIcon::Sun, "Exponha à luz plena ou indireta."),
            step(Day(6), "Colheita", StepIcon::Scissors, "Colha com tesoura limpa, rente ao substrato."),
        ],
    },
    Species {
        id: "girassol",
        name: "Girassol",
        image: "https://images.unsplash.com/photo-1561051241-368c743649a7",
        cultivation_time: "8 dias",
        cultivation_days: 8,
        light: Light::Full,
        watering: "1x por dia",
        difficulty: Difficulty::Medium,
        difficulty_level: DifficultyLevel::Intermediate,
        benefits: &["Energia"],
        flavor: Some("Crocante, sabor de nozes."),
        video: Some("https://videos.example.com/girassol-passo-a-passo"),
        timeline: &[
            TimelineStep {
                day: Day(1),
                title: "Hidratação",
                icon: StepIcon::Droplets,
                description: "Deixe as sementes de molho por 8-12 horas.",
                details: Some("Sementes com casca precisam de molho mais longo."),
                image: None,
            },
            step(Day(2), "Semeadura", StepIcon::Sprout, "Distribua sobre o substrato e pressione levemente."),
            step(Range("3-4"), "Peso + Escuro", StepIcon::Moon, "Cubra com peso leve para enraizar bem."),
            step(Range("5-7"), "Luz Plena", StepIcon::Sun, "Remova a cobertura e leve ao sol."),
            step(Day(8), "Colheita", StepIcon::Scissors, "Colha antes das folhas verdadeiras surgirem."),
        ],
    },
    Species {
        id: "rucula",
        name: "Rúcula",
        image: "https://images.unsplash.com/photo-1618511863161-a11b86016d9a",
        cultivation_time: "7 dias",
        cultivation_days: 7,
        light: Light::Indirect,
        watering: "2x por dia",
        difficulty: Difficulty::Easy,
        difficulty_level: DifficultyLevel::Beginner,
        benefits: &["Foco", "Imunidade"],
        flavor: Some("Rica em vitamina K, sabor levemente apimentado."),
        video: None,
        timeline: &[
            step(Day(1), "Semeadura", StepIcon::Sprout, "Sementes mucilaginosas: semeie direto, sem molho."),
            step(Range("2-3"), "Escuro", StepIcon::Moon, "Cubra e mantenha úmido com borrifador."),
            step(Range("4-6"), "Luz Indireta", StepIcon::Sun, "Descubra e gire a bandeja 1x ao dia."),
            step(Day(7), "Colheita", StepIcon::Scissors, "Colha com 5cm, consuma em até 3 dias."),
        ],
    },
    Species {
        id: "ervilha",
        name: "Ervilha",
        image: "https://images.unsplash.com/photo-1595855759920-86582396756c",
        cultivation_time: "10 dias",
        cultivation_days: 10,
        light: Light::Indirect,
        watering: "1x por dia",
        difficulty: Difficulty::Easy,
        difficulty_level: DifficultyLevel::Beginner,
        benefits: &["Energia", "Foco"],
        flavor: Some("Doce, gosto de ervilha fresca."),
        video: None,
        timeline: &[
            step(Day(1), "Hidratação", StepIcon::Droplets, "Molho de 12 horas para amolecer a casca."),
            step(Day(2), "Semeadura", StepIcon::Sprout, "Distribua densamente sobre o substrato."),
            step(Range("3-5"), "Escuro", StepIcon::Moon, "Mantenha coberto até os brotos atingirem 3cm."),
            step(Range("6-9"), "Luz Indireta", StepIcon::Sun, "Regue na base, evite molhar as folhas."),
            step(Day(10), "Colheita", StepIcon::Scissors, "Corte acima do primeiro par de folhas."),
        ],
    },
    Species {
        id: "couve",
        name: "Couve",
        image: "https://images.unsplash.com/photo-1524179091875-b494986c6e1b",
        cultivation_time: "9 dias",
        cultivation_days: 9,
        light: Light::Indirect,
        watering: "2x por dia",
        difficulty: Difficulty::Easy,
        difficulty_level: DifficultyLevel::Beginner,
        benefits: &["Detox", "Imunidade"],
        flavor: Some("Suave e levemente amargo, muito nutritivo."),
        video: None,
        timeline: &[
            step(Day(1), "Semeadura", StepIcon::Sprout, "Espalhe as sementes em camada única."),
            step(Range("2-3"), "Escuro", StepIcon::Moon, "Cubra a bandeja, borrife 2x ao dia."),
            step(Range("4-8"), "Luz Indireta", StepIcon::Sun, "Descubra quando os brotos levantarem a tampa."),
            step(Day(9), "Colheita", StepIcon::Scissors, "Colha quando os cotilédones estiverem abertos."),
        ],
    },
    Species {
        id: "beterraba",
        name: "Beterraba",
        image: "https://images.unsplash.com/photo-1593105544559-ecb03bf76f82",
        cultivation_time: "12 dias",
        cultivation_days: 12,
        light: Light::FullOrIndirect,
        watering: "2x por dia",
        difficulty: Difficulty::Medium,
        difficulty_level: DifficultyLevel::Intermediate,
        benefits: &["Energia", "Detox"],
        flavor: Some("Terroso e adocicado, caules vermelho-vivo."),
        video: None,
        timeline: &[
            step(Day(1), "Hidratação", StepIcon::Droplets, "Molho de 8 horas acelera a germinação."),
            step(Day(2), "Semeadura", StepIcon::Sprout, "Cada semente é um aglomerado: espace bem."),
            step(Range("3-6"), "Escuro", StepIcon::Moon, "Germinação lenta: paciência e umidade constante."),
            step(Range("7-11"), "Luz", StepIcon::Sun, "Luz plena intensifica a cor dos caules."),
            step(Day(12), "Colheita", StepIcon::Scissors, "Colha com 6-8cm, enxágue antes de consumir."),
        ],
    },
    Species {
        id: "manjericao",
        name: "Manjericão",
        image: "https://images.unsplash.com/photo-1618164435735-413d3b066c9a",
        cultivation_time: "14 dias",
        cultivation_days: 14,
        light: Light::Full,
        watering: "1x por dia",
        difficulty: Difficulty::Hard,
        difficulty_level: DifficultyLevel::Advanced,
        benefits: &["Foco"],
        flavor: Some("Aromático, notas de cravo e anis."),
        video: None,
        timeline: &[
            step(Day(1), "Semeadura", StepIcon::Sprout, "Sementes mucilaginosas: não deixe de molho."),
            step(Range("2-5"), "Germinação", StepIcon::Droplets, "Borrife com cuidado, sementes delicadas."),
            step(Range("6-12"), "Luz Plena", StepIcon::Sun, "Precisa de calor: mantenha acima de 20°C."),
            step(Range("13-14"), "Colheita", StepIcon::Scissors, "Colha aos poucos, as folhas machucam fácil."),
        ],
    },
    Species {
        id: "alfafa",
        name: "Alfafa",
        image: "https://images.unsplash.com/photo-1536054695850-b1eda18a5b90",
        cultivation_time: "6 dias",
        cultivation_days: 6,
        light: Light::Indirect,
        watering: "2x por dia",
        difficulty: Difficulty::Easy,
        difficulty_level: DifficultyLevel::Beginner,
        benefits: &["Imunidade", "Detox"],
        flavor: Some("Neutro e refrescante, textura delicada."),
        video: None,
        timeline: &[
            step(Day(1), "Hidratação", StepIcon::Droplets, "Molho curto, 4-6 horas."),
            step(Range("2-3"), "Escuro", StepIcon::Moon, "Enxágue e drene 2x ao dia."),
            step(Range("4-5"), "Luz Indireta", StepIcon::Sun, "Exponha à luz para esverdear."),
            step(Day(6), "Colheita", StepIcon::Scissors, "Colha e guarde refrigerado."),
        ],
    },
];

static INDEX: LazyLock<FxHashMap<&'static str, &'static Species>> =
    LazyLock::new(|| SPECIES.iter().map(|s| (s.id, s)).collect());

/// Distinct benefit tags across the catalog, sorted, for the benefit facet.
static BENEFITS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut tags: Vec<&'static str> = SPECIES.iter().flat_map(|s| s.benefits.iter().copied()).collect();
    tags.sort_unstable();
    tags.dedup();
    tags
});

/// The full ordered catalog.
pub fn species_list() -> &'static [Species] {
    SPECIES
}

/// Look up a species by id. Unknown ids return `None`.
pub fn species_by_id(id: &str) -> Option<&'static Species> {
    INDEX.get(id).copied()
}

/// All benefit tags available for filtering.
pub fn benefit_tags() -> &'static [&'static str] {
    BENEFITS.as_slice()
}
