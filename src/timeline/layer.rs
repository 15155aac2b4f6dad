use crate::timeline::annotation::{Annotation, AnnotationKind};

/// Paint layers, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Background decoration (highlights).
    Background,
    /// Arrows drawn over highlights but under content.
    Pointer,
    /// Labels and badges.
    Foreground,
}

/// Kind -> layer table. Kinds missing here (unknown) are never painted.
pub const LAYER_TABLE: [(AnnotationKind, Layer); 6] = [
    (AnnotationKind::Highlight, Layer::Background),
    (AnnotationKind::Arrow, Layer::Pointer),
    (AnnotationKind::Callout, Layer::Foreground),
    (AnnotationKind::Info, Layer::Foreground),
    (AnnotationKind::Warning, Layer::Foreground),
    (AnnotationKind::Success, Layer::Foreground),
];

/// z-index distance between consecutive layers; input position is added within a layer.
pub const LAYER_STRIDE: i64 = 1000;

impl Layer {
    /// Layer for `kind`, or `None` for kinds that produce no output.
    pub fn of(kind: AnnotationKind) -> Option<Self> {
        LAYER_TABLE
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|&(_, layer)| layer)
    }

    fn rank(self) -> i64 {
        match self {
            Self::Background => 0,
            Self::Pointer => 1,
            Self::Foreground => 2,
        }
    }

    /// z-index for the `index`-th annotation of the active set placed in this layer.
    pub fn z_index(self, index: usize) -> i64 {
        let index = i64::try_from(index).unwrap_or(LAYER_STRIDE - 1);
        self.rank() * LAYER_STRIDE + index.min(LAYER_STRIDE - 1)
    }
}

/// An annotation paired with its paint position.
#[derive(Clone, Copy, Debug)]
pub struct Layered<'a> {
    /// The annotation being painted.
    pub annotation: &'a Annotation,
    /// Its layer.
    pub layer: Layer,
    /// Stacking value; larger paints on top.
    pub z_index: i64,
}

/// Order `active` back to front: by layer, then by input order. Unknown kinds are dropped.
pub fn paint_order<'a>(active: &[&'a Annotation]) -> Vec<Layered<'a>> {
    let mut out: Vec<Layered<'a>> = active
        .iter()
        .enumerate()
        .filter_map(|(i, &a)| {
            let layer = Layer::of(a.kind)?;
            Some(Layered {
                annotation: a,
                layer,
                z_index: layer.z_index(i),
            })
        })
        .collect();
    // Stable, so equal keys keep input order.
    out.sort_by_key(|l| l.z_index);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/layer.rs"]
mod tests;
