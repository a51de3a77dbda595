//! Services offered and frequently asked questions.

use crate::domain::ProjectType;
use serde::Serialize;

/// One service the company sells, tied to the project type a quote request uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub project_type: ProjectType,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn service_offerings() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            project_type: ProjectType::Website,
            title: "Criação de Sites Profissionais",
            description: "Websites impactantes, responsivos e otimizados para converter visitantes em clientes.",
            features: &[
                "Design Responsivo (Mobile, Tablet, Desktop)",
                "Domínio e Hospedagem por 1 ano inclusos",
                "Integração com WhatsApp e Redes Sociais",
                "Otimização básica para Google (SEO)",
            ],
            benefits: &[
                "Presença online profissional e moderna",
                "Maior alcance e visibilidade para sua marca",
                "Excelente custo-benefício e retorno rápido",
            ],
        },
        ServiceOffering {
            project_type: ProjectType::Ecommerce,
            title: "Lojas Online (E-commerce)",
            description: "Plataformas de e-commerce robustas e fáceis de gerenciar para você vender 24/7.",
            features: &[
                "Carrinho de compras e gestão de produtos/estoque",
                "Integração com pagamentos (M-Pesa, e-Mola, Cartões)",
                "Painel de administração intuitivo",
                "E-mails e/ou SMS automáticos de transação",
            ],
            benefits: &[
                "Venda seus produtos online de forma eficiente",
                "Aumente suas vendas e expanda seu mercado",
                "Automatize processos e economize tempo",
            ],
        },
        ServiceOffering {
            project_type: ProjectType::MobileApp,
            title: "Apps Mobile (Android/iOS)",
            description: "Aplicativos móveis nativos ou híbridos para engajar seus usuários e oferecer serviços inovadores.",
            features: &[
                "Publicação na Play Store (e App Store sob consulta)",
                "Notificações Push para engajamento",
                "Integração com serviços e APIs locais/externas",
                "Interface intuitiva e focada na experiência do usuário",
            ],
            benefits: &[
                "Alcance seus clientes diretamente no celular",
                "Fidelize usuários e crie um canal de comunicação direto",
                "Ofereça funcionalidades inovadoras e se destaque",
            ],
        },
        ServiceOffering {
            project_type: ProjectType::CustomSystem,
            title: "Sistemas Web Personalizados",
            description: "Soluções sob medida para otimizar processos, gerenciar dados e integrar sistemas.",
            features: &[
                "ERPs, CRMs, sistemas de gestão escolar, etc.",
                "Geração de relatórios e dashboards analíticos",
                "Gestão de permissões e níveis de acesso",
                "Integrações com APIs de terceiros e sistemas legados",
            ],
            benefits: &[
                "Automatize tarefas e aumente a produtividade",
                "Segurança robusta e escalabilidade para o futuro",
                "Solução 100% adaptada às suas necessidades específicas",
            ],
        },
    ]
}

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Quanto tempo leva para meu site ficar pronto?",
            answer: "Dependendo da complexidade, um site institucional pode ser entregue entre 2 a 7 dias úteis. Projetos maiores como e-commerce ou sistemas personalizados têm prazos específicos definidos após análise.",
        },
        FaqEntry {
            question: "O que está incluído no serviço de criação de sites?",
            answer: "Inclui design responsivo, otimização básica para SEO, integração com WhatsApp/Redes Sociais, e para novos sites, geralmente oferecemos domínio e hospedagem por 1 ano.",
        },
        FaqEntry {
            question: "Vocês oferecem suporte após a entrega do projeto?",
            answer: "Sim, oferecemos um período de suporte para correções e ajustes pós-entrega. Planos de manutenção contínua também estão disponíveis para garantir que seu projeto permaneça atualizado e funcional.",
        },
        FaqEntry {
            question: "Como funciona o pagamento?",
            answer: "Normalmente, solicitamos um pagamento inicial (ex: 50%) para começar o projeto e o restante na entrega. Aceitamos diversas formas de pagamento, incluindo transferências, M-Pesa e e-Mola.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_quotable_type_has_one_offering() {
        let offerings = service_offerings();
        for kind in ProjectType::ALL {
            let count = offerings.iter().filter(|o| o.project_type == kind).count();
            let expected = if kind == ProjectType::Other { 0 } else { 1 };
            assert_eq!(count, expected, "{}", kind);
        }
    }

    #[test]
    fn test_faq_entries_are_filled() {
        let faq = faq_entries();
        assert_eq!(faq.len(), 4);
        assert!(faq.iter().all(|f| f.question.ends_with('?') && !f.answer.is_empty()));
    }
}
