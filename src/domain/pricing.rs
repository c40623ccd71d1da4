// ==========================================
// Call-a-Vet 经济测算 - 价格目录（équidos）
// ==========================================
// 职责: 价格页内容作为数据（方案、分组、价格、卖点）
// 币种: MXN，会员按月计价，按次付费给出单次价格区间
// ==========================================

use crate::domain::types::PlanTier;
use serde::Serialize;

/// 单次价格区间（按次付费方案）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    /// 计价单位 i18n 键（每次咨询 / 每个套餐）
    pub unit_key: &'static str,
}

/// 价格方案
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub title: &'static str,
    pub tier: PlanTier,
    /// 月费（会员）；按次付费为 0
    pub monthly_price: f64,
    pub price_range: Option<PriceRange>,
    pub badge: Option<&'static str>,
    pub highlight: bool,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

impl Plan {
    pub fn is_membership(&self) -> bool {
        self.monthly_price > 0.0
    }
}

const PER_CONSULT: &str = "pricing.unit.per_consult";
const PER_PACKAGE: &str = "pricing.unit.per_package";

static PLANS: &[Plan] = &[
    // ===== 按次付费 =====
    Plan {
        id: "chat",
        title: "Chat 10 min",
        tier: PlanTier::PayPerUse,
        monthly_price: 0.0,
        price_range: Some(PriceRange { min: 199.0, max: 349.0, unit_key: PER_CONSULT }),
        badge: None,
        highlight: false,
        features: &[
            "Triage y orientación rápida",
            "Envío de fotos y audio",
            "Derivación acelerada si aplica",
        ],
        cta: "Iniciar chat",
    },
    Plan {
        id: "video",
        title: "Video 15 min",
        tier: PlanTier::PayPerUse,
        monthly_price: 0.0,
        price_range: Some(PriceRange { min: 399.0, max: 699.0, unit_key: PER_CONSULT }),
        badge: None,
        highlight: false,
        features: &[
            "Evaluación visual y marcha",
            "Análisis de heridas/ojos/ranilla",
            "Resumen y próximos pasos",
        ],
        cta: "Agendar video",
    },
    Plan {
        id: "followup",
        title: "Seguimiento 7 días",
        tier: PlanTier::PayPerUse,
        monthly_price: 0.0,
        price_range: Some(PriceRange { min: 149.0, max: 249.0, unit_key: PER_PACKAGE }),
        badge: None,
        highlight: false,
        features: &[
            "Ajustes tras consulta digital",
            "Asíncrono con MVZ",
            "Alertas por banderas rojas",
        ],
        cta: "Comprar seguimiento",
    },
    // ===== 个人会员 =====
    Plan {
        id: "basic",
        title: "Básica Equina",
        tier: PlanTier::IndividualMembership,
        monthly_price: 299.0,
        price_range: None,
        badge: Some("Ahorro"),
        highlight: false,
        features: &[
            "2 chats / mes",
            "10% de descuento en video",
            "Triage prioritario",
        ],
        cta: "Elegir Básica",
    },
    Plan {
        id: "plus",
        title: "Plus Equina",
        tier: PlanTier::IndividualMembership,
        monthly_price: 549.0,
        price_range: None,
        badge: Some("Más popular"),
        highlight: true,
        features: &[
            "1 video + 3 chats / mes",
            "15% de descuento en servicios digitales",
            "Recordatorios de vacunas/desparasitación",
        ],
        cta: "Elegir Plus",
    },
    // ===== 马厩会员 =====
    Plan {
        id: "cuadra5",
        title: "Cuadra 5",
        tier: PlanTier::StableMembership,
        monthly_price: 999.0,
        price_range: None,
        badge: None,
        highlight: false,
        features: &[
            "Hasta 5 caballos",
            "6 chats + 2 videos / mes (compartidos)",
            "Reporte mensual por caballo",
        ],
        cta: "Empezar Cuadra 5",
    },
    Plan {
        id: "cuadra15",
        title: "Cuadra 15",
        tier: PlanTier::StableMembership,
        monthly_price: 2499.0,
        price_range: None,
        badge: Some("Mejor valor"),
        highlight: true,
        features: &[
            "Hasta 15 caballos",
            "20 chats + 6 videos / mes",
            "Línea prioritaria y capacitación trimestral",
        ],
        cta: "Empezar Cuadra 15",
    },
    // ===== 专业/牧场 =====
    Plan {
        id: "pro",
        title: "Pro Entrenador",
        tier: PlanTier::ProAndRanch,
        monthly_price: 1499.0,
        price_range: None,
        badge: None,
        highlight: false,
        features: &[
            "10 chats + 3 videos / mes",
            "Panel de casos",
            "Códigos de referido con comisión",
        ],
        cta: "Unirme como Pro",
    },
    Plan {
        id: "rancho",
        title: "Rancho Trabajo",
        tier: PlanTier::ProAndRanch,
        monthly_price: 2999.0,
        price_range: None,
        badge: None,
        highlight: false,
        features: &[
            "Hasta 25 caballos",
            "30 chats + 8 videos / mes",
            "Coordinación de derivaciones",
        ],
        cta: "Configurar plan",
    },
];

/// 价格目录（静态数据，只读）
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingCatalog;

impl PricingCatalog {
    pub fn new() -> Self {
        Self
    }

    /// 全部方案（页面展示顺序）
    pub fn plans(&self) -> &'static [Plan] {
        PLANS
    }

    /// 某分组下的方案
    pub fn plans_in(&self, tier: PlanTier) -> impl Iterator<Item = &'static Plan> {
        PLANS.iter().filter(move |p| p.tier == tier)
    }

    /// 按 id 查找（忽略大小写）
    pub fn plan(&self, id: &str) -> Option<&'static Plan> {
        let id = id.trim();
        PLANS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    /// 会员月费（可直接作为客户 ROI 的 membershipCost）
    ///
    /// 按次付费方案没有月费，返回 None
    pub fn membership_price(&self, id: &str) -> Option<f64> {
        self.plan(id)
            .filter(|p| p.is_membership())
            .map(|p| p.monthly_price)
    }
}
