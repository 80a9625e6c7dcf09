use super::super::domain::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

pub const AEP_CATALOG_VERSION: &str = "aep-nr17/2";

/// Checklist flavour chosen on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AepVariant {
    #[serde(rename = "operacional")]
    Operational,
    #[serde(rename = "administrativo")]
    Administrative,
}

impl AepVariant {
    pub const fn ordered() -> [Self; 2] {
        [Self::Operational, Self::Administrative]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Operational => "operacional",
            Self::Administrative => "administrativo",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "operacional" | "operational" => Some(Self::Operational),
            "administrativo" | "administrative" => Some(Self::Administrative),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub items: Vec<&'static str>,
}

impl ChecklistCategory {
    pub fn new(id: &'static str, title: &'static str, items: &[&'static str]) -> Self {
        Self {
            id,
            title,
            items: items.to_vec(),
        }
    }

    /// Text of the zero-based item, if the checklist defines it.
    pub fn item(&self, index: usize) -> Option<&'static str> {
        self.items.get(index).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AepChecklist {
    pub variant: AepVariant,
    pub title: &'static str,
    pub declared_items: usize,
    pub categories: Vec<ChecklistCategory>,
}

impl AepChecklist {
    pub fn category(&self, id: &str) -> Option<&ChecklistCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|category| category.items.len()).sum()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.items.is_empty() {
                return Err(CatalogError::EmptyGroup(category.id.to_string()));
            }
            if !seen.insert(category.id) {
                return Err(CatalogError::DuplicateCategory {
                    checklist: self.variant.key().to_string(),
                    category: category.id.to_string(),
                });
            }
        }

        let found = self.item_count();
        if found != self.declared_items {
            return Err(CatalogError::ItemCountMismatch {
                group: self.variant.key().to_string(),
                declared: self.declared_items,
                found,
            });
        }

        Ok(())
    }
}

/// Both AEP checklists, validated together.
#[derive(Debug, Clone)]
pub struct AepCatalog {
    version: &'static str,
    operational: AepChecklist,
    administrative: AepChecklist,
}

impl AepCatalog {
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(
            AEP_CATALOG_VERSION,
            operational_checklist(),
            administrative_checklist(),
        )
    }

    pub fn new(
        version: &'static str,
        operational: AepChecklist,
        administrative: AepChecklist,
    ) -> Result<Self, CatalogError> {
        operational.validate()?;
        administrative.validate()?;

        Ok(Self {
            version,
            operational,
            administrative,
        })
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn checklist(&self, variant: AepVariant) -> &AepChecklist {
        match variant {
            AepVariant::Operational => &self.operational,
            AepVariant::Administrative => &self.administrative,
        }
    }

    pub fn category(&self, variant: AepVariant, id: &str) -> Option<&ChecklistCategory> {
        self.checklist(variant).category(id)
    }

    /// Display title for a category id, searching the administrative checklist first.
    /// Unknown ids are echoed back.
    pub fn category_title<'a>(&self, id: &'a str) -> &'a str {
        let found = self
            .administrative
            .category(id)
            .or_else(|| self.operational.category(id));

        match found {
            Some(category) => category.title,
            None => {
                debug!(category = id, "no checklist category matches; echoing id as title");
                id
            }
        }
    }
}

fn operational_checklist() -> AepChecklist {
    AepChecklist {
        variant: AepVariant::Operational,
        title: "AEP Operacional",
        declared_items: 38,
        categories: vec![
            ChecklistCategory::new(
                "postura_alternancia",
                "Postura e alternância",
                &[
                    "Existe opção de alternância entre ficar em pé e sentado",
                    "Atividade realizada predominantemente em pé",
                    "Apoio para sentar disponível e com uso permitido (banco tipo sela, apoio isquiático, etc.)",
                    "Tapetes ou pisos anti-fadiga disponíveis nas áreas em pé prolongado",
                    "Possibilidade de realizar pequenos deslocamentos ou mudanças de postura",
                    "Atividades não exigem posturas forçadas ou sustentadas (inclinar, torcer, abaixar constantemente)",
                ],
            ),
            ChecklistCategory::new(
                "mobiliario_bancadas",
                "Mobiliário e Bancadas/Balcões",
                &[
                    "Altura do balcão adequada à atividade (≈ 90–100 cm para atividades médias; ≤ 85 cm para pesadas; ≥ 100 cm para leves)",
                    "Possui apoio para os pés embutido ou externo no balcão",
                    "Espaço suficiente sob o balcão para permitir aproximação do corpo",
                    "Borda do balcão não causa compressão nas pernas ou braços",
                    "Bancada permite postura neutra dos braços (ombros relaxados, cotovelos próximos ao corpo)",
                ],
            ),
            ChecklistCategory::new(
                "ambiente_fisico",
                "Ambiente Físico",
                &[
                    "Ventilação adequada ou climatização (natural ou artificial)",
                    "Renovação do ar suficientes",
                    "Iluminação adequada à atividade (mínimo 300 a 500 lux, conforme exigência da tarefa)",
                    "Piso regular, antiderrapante e sem acúmulo de resíduos",
                ],
            ),
            ChecklistCategory::new(
                "organizacao_trabalho",
                "Organização do trabalho",
                &[
                    "Jornada com intervalos e pausas adequadas",
                    "Diversificação de tarefas (evita repetição contínua e sobrecarga muscular)",
                    "Ritmo de trabalho não é imposto exclusivamente por máquinas",
                    "Autonomia para organizar parte do fluxo de trabalho",
                    "Pausas fisiológicas respeitadas",
                    "Existência de pausas para descanso (inclusive para membros inferiores)",
                ],
            ),
            ChecklistCategory::new(
                "transporte_manual",
                "Transporte manual de peso",
                &[
                    "Existência limite de peso definido para o transporte manual de cargas, considerando as características dos trabalhadores (sexo, idade, etc.)",
                    "Existência de relatos “fadiga físico ou desconforto térmico",
                    "Existência de sugestões de melhoria para conforto no posto.",
                ],
            ),
            ChecklistCategory::new(
                "maquinas_equipamentos",
                "Máquinas, Equipamentos e Transporte de peso",
                &[
                    "Controles e dispositivos estão ao alcance sem necessidade de esticar o corpo",
                    "Exigência de força excessiva ou movimentos repetitivo",
                    "Altura das máquinas permite operação com postura neutra",
                    "Área de trabalho iluminada e com visibilidade adequada",
                    "Equipamentos com vibração ou ruído excessivo",
                    "Existência de espaço para movimentação segura e sem obstáculos",
                ],
            ),
            ChecklistCategory::new(
                "existe_transporte",
                "Existe transporte manual de cargas",
                &[
                    "Existe transporte manual de cargas?",
                    "Existência de consideração Norma ISO 11228-1 (Até 25kg H / 20kg M)",
                    "Existência de movimentação manual frequente ou em posturas inadequadas",
                    "A frequência de transporte manual e distância percorrida são adequadas",
                    "Utilização de auxílios mecânicos (carrinhos, paleteiras, etc.)",
                    "Existência de técnica adequada de levantamento manual de peso",
                    "Existência de treinamento para movimentação manual de peso",
                    "Existência de cinto de segurança lombar para movimentação manual de peso",
                ],
            ),
        ],
    }
}

fn administrative_checklist() -> AepChecklist {
    AepChecklist {
        variant: AepVariant::Administrative,
        title: "AEP Administrativo",
        declared_items: 55,
        categories: vec![
            ChecklistCategory::new(
                "mesa",
                "Mesa",
                &[
                    "Altura adequada à atividade em geral, 72-75 cm adulto)",
                    "Espaço suficiente para teclado, mouse e outros materiais",
                    "Permite apoio dos antebraços sem tensionar ombros",
                    "Bordas arredondadas e sem superfície cortante",
                    "Permite posicionamento ergonômicos dos equipamentos",
                ],
            ),
            ChecklistCategory::new(
                "cadeira",
                "Cadeira",
                &[
                    "Altura do assento ajustável",
                    "Encosto anatômico e ajuste de inclinação",
                    "Encosto adequado à região lombar",
                    "Possui recurso giratório",
                    "Estofado com tecido \"respirável\"",
                    "Conformação e profundidade do assento adequados",
                    "Borda frontal arredondada",
                    "Estabilidade (mínimo 5 rodízios)",
                    "Posição do assento permite apoio total dos pés no chão ou apoio",
                    "Apoio dorsal com regulagem de inclinação",
                    "Apoio para os braços com ajuste de altura",
                ],
            ),
            ChecklistCategory::new(
                "espaco_layout",
                "Espaço físico e layout",
                &[
                    "Espaço suficiente para livre movimentação dos pés",
                    "Área de circulação desobstruída",
                    "Espaço suficiente para organização dos equipamentos",
                    "Fios desorganizados no chão",
                    "Estação de trabalho compatível com estatura do usuário",
                ],
            ),
            ChecklistCategory::new(
                "laptop",
                "Laptop / Notebook",
                &[
                    "Uso de suporte para elevar a tela",
                    "Uso de teclado e mouse sobressalentes",
                    "Posicionamento ergonômico e teclado e mouse",
                ],
            ),
            ChecklistCategory::new(
                "postura",
                "Postura de trabalho",
                &[
                    "Coluna ereta, sem curvaturas forçadas",
                    "Antebraços apoiados sobra a superfície (ângulo 90° a 100°)",
                    "Joelhos (ângulo 90°) com pés apoiados no chão)",
                    "Cabeça alinhada ao tronco, sem flexão",
                    "Punhos neutros sem extensão ou flexão",
                    "Ombros relaxados",
                ],
            ),
            ChecklistCategory::new(
                "organizacao_pausas",
                "Organização de trabalho / pausas",
                &[
                    "Jornada com pausas regulares",
                    "Diversificação de tarefas",
                    "Trabalho com cobrança excessiva de terceiros",
                    "Autonomia para organizar a própria rotina de trabalho",
                    "Pausas ativas orientadas ou incentivadas",
                    "Intervalos para alimentação e descanso",
                ],
            ),
            ChecklistCategory::new(
                "apoio_pes",
                "Apoio para os pés",
                &[
                    "Necessário quando os pés não tocam totalmente o chão",
                    "Antiderrapante",
                    "Regulagem de inclinação",
                    "Adequado a estatura do usuário",
                    "Utilizado pelo usuário",
                ],
            ),
            ChecklistCategory::new(
                "monitor",
                "Monitor (tela computador)",
                &[
                    "Altura da borda superior na linha dos olhos ou ligeiramente abaixo",
                    "Distância dos olhos entre 50 e 70 cm",
                    "Sem reflexos diretos de janelas ou luminárias",
                    "Inclinação ajustável",
                ],
            ),
            ChecklistCategory::new(
                "iluminacao",
                "Iluminação",
                &[
                    "Iluminação geral suficiente (500 lux ou conforme tarefa)",
                    "Ausência de reflexos no monitor",
                    "Luminária de mesa com foco ajustável (se necessário)",
                    "Cortinas ou persianas para controle de luz natural",
                    "Luz direta não incide nos olhos do trabalhador",
                ],
            ),
            ChecklistCategory::new(
                "temperatura",
                "Temperatura / conforto",
                &["Temperatura do ambiente dentro dos limites de conforto térmico (conforme NR-17: 20ºC a 23ºC para trabalho leve/moderado em ambientes climatizados)"],
            ),
            ChecklistCategory::new(
                "teclado_mouse",
                "Teclado / mouse / mouse pad",
                &[
                    "Mouse próximo ao teclado, na mesma altura",
                    "Mouse pad com apoio para punho (opcional)",
                    "Antebraço apoiado durante uso do mouse",
                    "Teclado posicionado a cerca de 10–15 cm da borda da mesa",
                ],
            ),
        ],
    }
}
