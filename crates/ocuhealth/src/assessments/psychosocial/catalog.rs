use super::super::domain::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const COPSOQ_CATALOG_VERSION: &str = "copsoq-ii-br/1";

pub type QuestionId = u16;

/// Whether a higher Likert answer describes a better or a worse condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positiva",
            Self::Negative => "Negativa",
        }
    }
}

/// Summary of the polarities found inside one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolarity {
    Positive,
    Negative,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub polarity: Polarity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub questions: Vec<Question>,
}

impl DomainDefinition {
    /// Build a domain from `(id, polarity, text)` rows.
    pub fn from_table(
        key: &'static str,
        name: &'static str,
        questions: &[(QuestionId, Polarity, &'static str)],
    ) -> Self {
        Self {
            key,
            name,
            questions: questions
                .iter()
                .map(|(id, polarity, text)| Question {
                    id: *id,
                    text: *text,
                    polarity: *polarity,
                })
                .collect(),
        }
    }

    /// Derived from the per-question table, never declared separately.
    pub fn polarity(&self) -> DomainPolarity {
        let positives = self
            .questions
            .iter()
            .filter(|question| question.polarity == Polarity::Positive)
            .count();

        if positives == self.questions.len() {
            DomainPolarity::Positive
        } else if positives == 0 {
            DomainPolarity::Negative
        } else {
            DomainPolarity::Mixed
        }
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|question| question.id)
    }
}

/// Immutable question-to-domain mapping with per-question polarity.
#[derive(Debug, Clone)]
pub struct CopsoqCatalog {
    version: &'static str,
    domains: Vec<DomainDefinition>,
    index: HashMap<QuestionId, (usize, usize)>,
}

impl CopsoqCatalog {
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(COPSOQ_CATALOG_VERSION, standard_domains())
    }

    pub fn new(
        version: &'static str,
        domains: Vec<DomainDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::new();

        for (domain_idx, domain) in domains.iter().enumerate() {
            if domain.questions.is_empty() {
                return Err(CatalogError::EmptyGroup(domain.key.to_string()));
            }

            for (question_idx, question) in domain.questions.iter().enumerate() {
                if let Some((owner, _)) = index.insert(question.id, (domain_idx, question_idx)) {
                    return Err(CatalogError::DuplicateQuestion {
                        question: question.id,
                        first: domains[owner].key.to_string(),
                        second: domain.key.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            version,
            domains,
            index,
        })
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn domains(&self) -> &[DomainDefinition] {
        &self.domains
    }

    pub fn domain(&self, key: &str) -> Option<&DomainDefinition> {
        self.domains.iter().find(|domain| domain.key == key)
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.index
            .get(&id)
            .map(|(domain, question)| &self.domains[*domain].questions[*question])
    }

    pub fn domain_of(&self, id: QuestionId) -> Option<&DomainDefinition> {
        self.index.get(&id).map(|(domain, _)| &self.domains[*domain])
    }

    pub fn question_count(&self) -> usize {
        self.index.len()
    }
}

fn domain(
    key: &'static str,
    name: &'static str,
    questions: &[(QuestionId, Polarity, &'static str)],
) -> DomainDefinition {
    DomainDefinition::from_table(key, name, questions)
}

fn standard_domains() -> Vec<DomainDefinition> {
    use Polarity::{Negative, Positive};

    vec![
        domain(
            "demandas_quantitativas",
            "Demandas Quantitativas",
            &[
                (3, Negative, "O seu trabalho exige que você trabalhe muito rápido?"),
                (4, Negative, "Você tem muito trabalho a fazer?"),
                (5, Negative, "O seu trabalho exige muita concentração?"),
                (6, Negative, "Você precisa realizar várias tarefas ao mesmo tempo?"),
            ],
        ),
        domain(
            "demandas_cognitivas",
            "Demandas Cognitivas",
            &[
                (7, Negative, "O seu trabalho exige que você tome decisões difíceis?"),
                (8, Negative, "É necessário pensar em muitas coisas ao mesmo tempo?"),
                (9, Positive, "O seu trabalho exige muita criatividade?"),
                (10, Positive, "Você precisa aprender coisas novas no seu trabalho?"),
            ],
        ),
        domain(
            "demandas_emocionais",
            "Demandas Emocionais",
            &[
                (11, Negative, "O seu trabalho exige que você esconda emoções?"),
                (12, Negative, "Você lida com situações emocionalmente difíceis?"),
                (13, Negative, "O seu trabalho afeta o seu estado emocional?"),
            ],
        ),
        domain(
            "influencia_trabalho",
            "Influência no Trabalho",
            &[
                (14, Positive, "Você tem influência sobre como realiza o seu trabalho?"),
                (15, Positive, "Você pode decidir a ordem das suas tarefas?"),
                (16, Positive, "Você pode decidir o seu ritmo de trabalho?"),
            ],
        ),
        domain(
            "possibilidades_desenvolvimento",
            "Possibilidades de Desenvolvimento",
            &[
                (17, Positive, "Você tem a possibilidade de aprender coisas novas?"),
                (18, Positive, "Seu trabalho permite desenvolver suas habilidades?"),
                (
                    19,
                    Positive,
                    "Você sente que seu trabalho contribui para seu crescimento pessoal?",
                ),
            ],
        ),
        domain(
            "significado_trabalho",
            "Significado do Trabalho",
            &[
                (20, Positive, "Você sente que o seu trabalho é importante?"),
                (21, Positive, "Você sente orgulho do seu trabalho?"),
                (22, Positive, "O seu trabalho faz sentido para você?"),
            ],
        ),
        domain(
            "clareza_papel",
            "Clareza de Papel",
            &[
                (23, Positive, "Você sabe exatamente quais são suas responsabilidades?"),
                (24, Positive, "Você sabe quais decisões pode tomar sozinho(a)?"),
                (25, Positive, "As tarefas atribuídas a você são claras?"),
            ],
        ),
        domain(
            "conflitos_papel",
            "Conflitos de Papel",
            &[
                (26, Negative, "Você recebe tarefas contraditórias?"),
                (27, Negative, "É necessário fazer coisas que você acha desnecessárias?"),
                (28, Negative, "É necessário negligenciar uma tarefa para cumprir outra?"),
            ],
        ),
        domain(
            "previsibilidade",
            "Previsibilidade",
            &[
                (
                    29,
                    Positive,
                    "Você é informado com antecedência sobre mudanças que afetam seu trabalho?",
                ),
                (
                    30,
                    Positive,
                    "Você sabe o que acontecerá em seu trabalho nas próximas semanas?",
                ),
                (31, Positive, "As mudanças na empresa são comunicadas claramente?"),
            ],
        ),
        domain(
            "reconhecimento",
            "Reconhecimento",
            &[
                (32, Positive, "Você recebe reconhecimento suficiente pelo seu trabalho?"),
                (33, Positive, "Seu trabalho é valorizado pela chefia?"),
                (34, Positive, "Seu trabalho é reconhecido pelos colegas?"),
            ],
        ),
        domain(
            "apoio_chefia",
            "Apoio Social - Chefia",
            &[
                (35, Positive, "Você recebe ajuda da sua chefia quando necessário?"),
                (36, Positive, "Sua chefia se interessa pelo seu bem-estar?"),
                (37, Positive, "A chefia trata os trabalhadores com respeito?"),
            ],
        ),
        domain(
            "apoio_colegas",
            "Apoio Social - Colegas",
            &[
                (38, Positive, "Você recebe apoio dos colegas?"),
                (
                    39,
                    Positive,
                    "Seus colegas estão dispostos a ouvir seus problemas relacionados ao trabalho?",
                ),
                (40, Positive, "O ambiente entre os colegas é agradável?"),
            ],
        ),
        domain(
            "feedback",
            "Feedback",
            &[
                (41, Positive, "Você recebe retorno sobre o seu desempenho?"),
                (42, Positive, "Você sabe se está realizando um bom trabalho?"),
                (43, Positive, "O feedback que você recebe é útil?"),
            ],
        ),
        domain(
            "qualidade_lideranca",
            "Qualidade da Liderança",
            &[
                (44, Positive, "Sua chefia é eficiente na gestão do setor?"),
                (45, Positive, "Sua chefia lida bem com conflitos?"),
                (46, Positive, "Sua chefia comunica bem as decisões?"),
            ],
        ),
        domain(
            "justica_respeito",
            "Justiça e Respeito",
            &[
                (47, Positive, "Você é tratado de forma justa no trabalho?"),
                (48, Positive, "As decisões são tomadas com imparcialidade?"),
                (49, Positive, "Os procedimentos da empresa são justos?"),
            ],
        ),
        domain(
            "compromisso_local",
            "Compromisso com o Local de Trabalho",
            &[
                (50, Positive, "Você se sente comprometido com sua organização?"),
                (
                    51,
                    Positive,
                    "Você recomendaria sua empresa como um bom lugar para trabalhar?",
                ),
                (52, Positive, "Você sente orgulho de pertencer à sua empresa?"),
            ],
        ),
        domain(
            "inseguranca_trabalho",
            "Insegurança no Trabalho",
            &[
                (53, Negative, "Você teme perder o emprego?"),
                (54, Negative, "Você acha que será transferido contra sua vontade?"),
                (55, Negative, "Há risco de reestruturação no seu setor?"),
            ],
        ),
        domain(
            "conflito_trabalho_familia",
            "Conflito Trabalho-Família",
            &[
                (56, Negative, "Seu trabalho afeta negativamente sua vida pessoal?"),
                (
                    57,
                    Negative,
                    "Você chega em casa cansado(a) demais para atividades pessoais?",
                ),
                (
                    58,
                    Negative,
                    "Suas responsabilidades familiares afetam seu desempenho no trabalho?",
                ),
            ],
        ),
        domain(
            "burnout",
            "Burnout",
            &[
                (59, Negative, "Você sente-se esgotado(a) após o trabalho?"),
                (60, Positive, "Você dorme bem em noites úteis?"),
                (61, Negative, "Você tem dores físicas relacionadas ao trabalho?"),
            ],
        ),
        domain(
            "presenteismo",
            "Presenteísmo",
            &[
                (62, Negative, "Você continua trabalhando mesmo doente?"),
                (
                    63,
                    Negative,
                    "Você já trabalhou mesmo sem condições físicas ou emocionais?",
                ),
                (
                    64,
                    Negative,
                    "Você sente que não pode faltar ao trabalho mesmo se precisar?",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_assigns_every_question_once() {
        let catalog = CopsoqCatalog::standard().expect("standard catalog is consistent");
        assert_eq!(catalog.domains().len(), 20);
        assert_eq!(catalog.question_count(), 62);
        assert_eq!(catalog.version(), COPSOQ_CATALOG_VERSION);

        let owner = catalog.domain_of(60).expect("question 60 is mapped");
        assert_eq!(owner.key, "burnout");
    }

    #[test]
    fn mixed_domains_carry_per_question_polarity() {
        let catalog = CopsoqCatalog::standard().expect("catalog");

        let cognitive = catalog.domain("demandas_cognitivas").expect("domain");
        assert_eq!(cognitive.polarity(), DomainPolarity::Mixed);
        assert_eq!(catalog.question(7).map(|q| q.polarity), Some(Polarity::Negative));
        assert_eq!(catalog.question(9).map(|q| q.polarity), Some(Polarity::Positive));

        assert_eq!(
            catalog.domain("presenteismo").map(DomainDefinition::polarity),
            Some(DomainPolarity::Negative)
        );
        assert_eq!(
            catalog.domain("feedback").map(DomainDefinition::polarity),
            Some(DomainPolarity::Positive)
        );
    }

    #[test]
    fn rejects_question_shared_by_two_domains() {
        let domains = vec![
            domain("a", "A", &[(1, Polarity::Positive, "q1")]),
            domain("b", "B", &[(1, Polarity::Negative, "q1 again")]),
        ];

        match CopsoqCatalog::new("test", domains) {
            Err(CatalogError::DuplicateQuestion {
                question,
                first,
                second,
            }) => {
                assert_eq!(question, 1);
                assert_eq!(first, "a");
                assert_eq!(second, "b");
            }
            other => panic!("expected duplicate question error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_domain() {
        let domains = vec![domain("empty", "Empty", &[])];
        assert_eq!(
            CopsoqCatalog::new("test", domains).err(),
            Some(CatalogError::EmptyGroup("empty".to_string()))
        );
    }
}
