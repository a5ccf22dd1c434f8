//! Fixed phrase pools for the speech builder and conversational reply.

pub const SALUTATIONS: [&str; 4] = [
    "Caras e caros concidadãos,",
    "Minhas senhoras e meus senhores,",
    "Caros amigos e amigas,",
    "Estimados portugueses e portuguesas,",
];

pub const ACTION_AXES: [&str; 6] = [
    "reforçar o poder de compra das famílias",
    "modernizar os serviços públicos",
    "apoiar as pequenas e médias empresas",
    "garantir um Serviço Nacional de Saúde de qualidade",
    "investir numa escola pública exigente",
    "combater a corrupção com transparência",
];

pub const MEASURES: [&str; 8] = [
    "reduzir o IRS para a classe média",
    "simplificar o licenciamento para empresas",
    "contratar mais médicos de família",
    "valorizar a carreira dos professores",
    "reforçar o policiamento de proximidade",
    "acelerar os tribunais administrativos e fiscais",
    "criar um balcão digital único para o cidadão",
    "apoiar o acesso dos jovens à habitação",
];

pub const CLOSINGS: [&str; 4] = [
    "Juntos, vamos construir um país mais justo e mais próspero.",
    "O futuro constrói-se hoje, com coragem e responsabilidade.",
    "Contem connosco para pôr Portugal a crescer.",
    "Está na hora de mudar, e a mudança começa agora.",
];

pub const THANKS: &str = "Muito obrigado.";

/// Domain terms looked up in generated speeches, in priority order
pub const KEYWORD_POOL: [&str; 12] = [
    "Portugal",
    "economia",
    "famílias",
    "saúde",
    "educação",
    "segurança",
    "justiça",
    "PME",
    "confiança",
    "transparência",
    "inovação",
    "meritocracia",
];

pub const TITLE_PHRASE: &str = "Discurso de Compromisso";

pub const LOCAL_REPLY_PREAMBLE: &str =
    "Modo IA Local: estou a funcionar offline e não consigo analisar a sua mensagem em profundidade.";

pub const LOCAL_REPLY_ADVICE: &str =
    "Para obter respostas completas, ative o serviço de IA real nas definições da aplicação.";
