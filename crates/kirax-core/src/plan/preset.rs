//! Built-in subscription plans.

use super::model::{Plan, PlanTier};

/// Returns the fixed subscription plans offered by the application.
///
/// - **Free**: short trial for new users evaluating the product
/// - **Starter**: day-to-day tier for professionals and small businesses
/// - **Enterprise**: contract tier with SLA and integrations
pub fn builtin_plans() -> Vec<Plan> {
    vec![
        Plan {
            tier: PlanTier::Free,
            price: "R$ 0 (teste 1–2 dias)".to_string(),
            audience: "Novo usuário testando a Kirax.IA antes de assinar.".to_string(),
            limits: "- Acesso por até 2 dias após cadastro\n- Limite reduzido de mensagens\n- Uso apenas para testes".to_string(),
            benefits: "- Experiência completa de teste\n- Acesso aos principais especialistas Kirax\n- Ideal para validar se o produto serve para o negócio".to_string(),
        },
        Plan {
            tier: PlanTier::Starter,
            price: "R$ 49,90 / mês".to_string(),
            audience: "Profissionais, infoprodutores e pequenos negócios.".to_string(),
            limits: "- Volume de mensagens adequado para uso diário\n- Upload de múltiplos PDFs\n- Acesso a modelos mais avançados (conforme saldo no OpenRouter)".to_string(),
            benefits: "- Todos os especialistas Kirax\n- Histórico estendido\n- Priorização moderada no suporte".to_string(),
        },
        Plan {
            tier: PlanTier::Enterprise,
            price: "R$ 149,90 / mês".to_string(),
            audience: "Empresas e times que precisam de volume maior, SLA e integrações.".to_string(),
            limits: "- Limites sob contrato\n- Acesso dedicado à infraestrutura".to_string(),
            benefits: "- Onboarding dedicado\n- Treinamento de equipe\n- Integração com sistemas internos\n- Suporte com SLA".to_string(),
        },
    ]
}
