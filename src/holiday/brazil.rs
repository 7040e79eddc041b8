use crate::holiday::{find_fixed, find_movable, Holiday};
use crate::time::{Date, Month, Year};

const NATIONAL: [(usize, Month, &str); 8] = [
    (1, Month::January, "Confraternização Universal"),
    (21, Month::April, "Tiradentes"),
    (1, Month::May, "Dia do Trabalhador"),
    (7, Month::September, "Independência do Brasil"),
    (12, Month::October, "Nossa Senhora Aparecida"),
    (2, Month::November, "Finados"),
    (15, Month::November, "Proclamação da República"),
    (25, Month::December, "Natal"),
];

/// National holiday since Lei nº 14.759/2023.
const BLACK_CONSCIOUSNESS: [(usize, Month, &str); 1] = [(
    20,
    Month::November,
    "Dia Nacional de Zumbi e da Consciência Negra",
)];

const BLACK_CONSCIOUSNESS_SINCE: Year = Year::new(2024);

const MOVABLE: [(isize, &str); 5] = [
    (-47, "Carnaval"),
    (-46, "Quarta-feira de Cinzas"),
    (-2, "Sexta-feira Santa"),
    (0, "Páscoa"),
    (60, "Corpus Christi"),
];

/// The 26 states and the federal district of Brazil.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BrazilianState {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

impl BrazilianState {
    pub const ALL: [Self; 27] = [
        Self::AC,
        Self::AL,
        Self::AP,
        Self::AM,
        Self::BA,
        Self::CE,
        Self::DF,
        Self::ES,
        Self::GO,
        Self::MA,
        Self::MT,
        Self::MS,
        Self::MG,
        Self::PA,
        Self::PB,
        Self::PR,
        Self::PE,
        Self::PI,
        Self::RJ,
        Self::RN,
        Self::RS,
        Self::RO,
        Self::RR,
        Self::SC,
        Self::SP,
        Self::SE,
        Self::TO,
    ];

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AC => "AC",
            Self::AL => "AL",
            Self::AP => "AP",
            Self::AM => "AM",
            Self::BA => "BA",
            Self::CE => "CE",
            Self::DF => "DF",
            Self::ES => "ES",
            Self::GO => "GO",
            Self::MA => "MA",
            Self::MT => "MT",
            Self::MS => "MS",
            Self::MG => "MG",
            Self::PA => "PA",
            Self::PB => "PB",
            Self::PR => "PR",
            Self::PE => "PE",
            Self::PI => "PI",
            Self::RJ => "RJ",
            Self::RN => "RN",
            Self::RS => "RS",
            Self::RO => "RO",
            Self::RR => "RR",
            Self::SC => "SC",
            Self::SP => "SP",
            Self::SE => "SE",
            Self::TO => "TO",
        }
    }

    /// Expects an uppercase code like `RJ`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.code() == code)
    }

    fn holidays(&self) -> &'static [(usize, Month, &'static str)] {
        match self {
            Self::AC => &[
                (23, Month::January, "Dia do Evangélico"),
                (15, Month::June, "Aniversário do Acre"),
                (5, Month::September, "Dia da Amazônia"),
                (17, Month::November, "Assinatura do Tratado de Petrópolis"),
            ],
            Self::AL => &[
                (24, Month::June, "São João"),
                (29, Month::June, "São Pedro"),
                (16, Month::September, "Emancipação Política de Alagoas"),
                (20, Month::November, "Dia da Consciência Negra"),
                (30, Month::November, "Dia do Evangélico"),
            ],
            Self::AP => &[
                (19, Month::March, "São José"),
                (25, Month::July, "São Tiago"),
                (5, Month::October, "Criação do Estado do Amapá"),
                (20, Month::November, "Dia da Consciência Negra"),
            ],
            Self::AM => &[
                (5, Month::September, "Elevação do Amazonas à Categoria de Província"),
                (20, Month::November, "Dia da Consciência Negra"),
                (8, Month::December, "Nossa Senhora da Conceição"),
            ],
            Self::BA => &[(2, Month::July, "Independência da Bahia")],
            Self::CE => &[
                (19, Month::March, "São José"),
                (25, Month::March, "Data Magna do Ceará"),
            ],
            Self::DF => &[
                (21, Month::April, "Fundação de Brasília"),
                (30, Month::November, "Dia do Evangélico"),
            ],
            Self::ES | Self::GO => &[(28, Month::October, "Dia do Servidor Público")],
            Self::MA => &[(
                28,
                Month::July,
                "Adesão do Maranhão à Independência do Brasil",
            )],
            Self::MT => &[(20, Month::November, "Dia da Consciência Negra")],
            Self::MS => &[(
                11,
                Month::October,
                "Criação do Estado de Mato Grosso do Sul",
            )],
            Self::MG => &[(21, Month::April, "Data Magna de Minas Gerais")],
            Self::PA => &[(
                15,
                Month::August,
                "Adesão do Grão-Pará à Independência do Brasil",
            )],
            Self::PB => &[(5, Month::August, "Fundação do Estado da Paraíba")],
            Self::PR => &[(19, Month::December, "Emancipação Política do Paraná")],
            Self::PE => &[
                (6, Month::March, "Revolução Pernambucana"),
                (24, Month::June, "São João"),
            ],
            Self::PI => &[(19, Month::October, "Dia do Piauí")],
            Self::RJ => &[
                (23, Month::April, "Dia de São Jorge"),
                (20, Month::November, "Dia da Consciência Negra"),
            ],
            Self::RN => &[
                (29, Month::June, "São Pedro"),
                (3, Month::October, "Mártires de Cunhaú e Uruaçu"),
            ],
            Self::RS => &[(20, Month::September, "Revolução Farroupilha")],
            Self::RO => &[
                (4, Month::January, "Criação do Estado de Rondônia"),
                (18, Month::June, "Dia do Evangélico"),
            ],
            Self::RR => &[(5, Month::October, "Criação de Roraima")],
            Self::SC => &[(11, Month::August, "Dia de Santa Catarina")],
            Self::SP => &[(9, Month::July, "Revolução Constitucionalista de 1932")],
            Self::SE => &[(8, Month::July, "Autonomia Política de Sergipe")],
            Self::TO => &[
                (18, Month::March, "Autonomia do Estado do Tocantins"),
                (8, Month::September, "Nossa Senhora da Natividade"),
                (5, Month::October, "Criação do Estado do Tocantins"),
            ],
        }
    }
}

pub(super) fn holiday(state: Option<BrazilianState>, date: Date) -> Option<Holiday> {
    find_fixed(&NATIONAL, date)
        .or_else(|| {
            if date.year() >= BLACK_CONSCIOUSNESS_SINCE {
                find_fixed(&BLACK_CONSCIOUSNESS, date)
            } else {
                None
            }
        })
        .or_else(|| find_movable(&MOVABLE, date))
        .or_else(|| state.and_then(|state| find_fixed(state.holidays(), date)))
}
