use crate::error::TopologyError;

use super::Mesh;

impl Mesh {
    /// Checks the structural invariants of the subdivision.
    ///
    /// - `twin(twin(e)) == e` and a twin never shares its origin
    /// - `prev(next(e)) == e`
    /// - every `next` cycle closes and keeps one incident face
    /// - each vertex's incident edge leaves that vertex
    /// - Euler's formula `V - E + F = 2`
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidTopology`] describing the first violation.
    pub fn validate(&self) -> Result<(), TopologyError> {
        for (id, edge) in &self.half_edges {
            let twin = self.half_edge(edge.twin)?;
            if twin.twin != id {
                return Err(TopologyError::InvalidTopology("twin is not an involution".into()));
            }
            if twin.origin == edge.origin {
                return Err(TopologyError::InvalidTopology("twins share an origin".into()));
            }
            if self.half_edge(edge.next)?.prev != id {
                return Err(TopologyError::InvalidTopology("next/prev mismatch".into()));
            }
            if self.half_edge(edge.next)?.origin != self.origin(edge.twin)? {
                return Err(TopologyError::InvalidTopology("next does not continue from the destination".into()));
            }
        }

        for (id, face) in &self.faces {
            let starts = face.outer_component.iter().chain(face.inner_components.iter());
            for &start in starts {
                let mut count = 0;
                let mut edge = start;
                loop {
                    if self.incident_face(edge)? != id {
                        return Err(TopologyError::InvalidTopology("incident face varies along a cycle".into()));
                    }
                    count += 1;
                    edge = self.next(edge)?;
                    if edge == start {
                        break;
                    }
                    if count > self.half_edges.len() {
                        return Err(TopologyError::InvalidTopology("boundary cycle does not close".into()));
                    }
                }
            }
        }

        for (id, vertex) in &self.vertices {
            if let Some(edge) = vertex.incident_edge {
                if self.origin(edge)? != id {
                    return Err(TopologyError::InvalidTopology("incident edge does not leave its vertex".into()));
                }
            }
        }

        let v = self.vertices.len();
        let e = self.half_edges.len() / 2;
        let f = self.faces.len();
        if v + f != e + 2 {
            return Err(TopologyError::InvalidTopology(format!(
                "Euler characteristic violated: V={v}, E={e}, F={f}"
            )));
        }

        Ok(())
    }
}
