// Static page content: Docker sections, their diagrams and reference tables.
use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    pub key: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Command {
    pub cmd: &'static str,
    pub desc: &'static str,
}

/// Box in diagram space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub label: &'static str,
    pub detail: &'static str,
    pub accent: &'static str,
}

impl Node {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Where the ray from the center along `(dx, dy)` leaves the box.
    fn exit_point(&self, dx: f64, dy: f64) -> Point {
        let c = self.center();
        let tx = if dx == 0.0 { f64::INFINITY } else { (self.w / 2.0) / dx.abs() };
        let ty = if dy == 0.0 { f64::INFINITY } else { (self.h / 2.0) / dy.abs() };
        let t = tx.min(ty);
        if !t.is_finite() {
            return c;
        }
        Point::new(c.x + dx * t, c.y + dy * t)
    }
}

/// Arrow between two nodes, by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    pub nodes: &'static [Node],
    pub edges: &'static [Edge],
}

impl Diagram {
    /// Start and end of edge `i`, clipped to the node borders. `None` when
    /// the edge references a missing node.
    pub fn edge_points(&self, i: usize) -> Option<(Point, Point)> {
        let edge = self.edges.get(i)?;
        let a = self.nodes.get(edge.from)?;
        let b = self.nodes.get(edge.to)?;
        let (ca, cb) = (a.center(), b.center());
        let d = cb.sub(ca);
        Some((a.exit_point(d.x, d.y), b.exit_point(-d.x, -d.y)))
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub num: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub what: &'static str,
    pub analogy: &'static str,
    pub terms: &'static [Term],
    pub commands: &'static [Command],
    pub flow: &'static [&'static str],
    pub compose: Option<&'static str>,
    pub diagram: Diagram,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Concept,
    Commands,
    Flow,
    Compose,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Concept => "CONCEPT",
            Tab::Commands => "COMMANDS",
            Tab::Flow => "FLOW",
            Tab::Compose => "COMPOSE",
        }
    }

    pub fn available_for(section: &Section) -> Vec<Tab> {
        let mut tabs = vec![Tab::Concept, Tab::Commands, Tab::Flow];
        if section.compose.is_some() {
            tabs.push(Tab::Compose);
        }
        tabs
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryRow {
    pub concept: &'static str,
    pub what: &'static str,
    pub cmd: &'static str,
    pub note: &'static str,
}

const BLUE: &str = "#3b82f6";
const PURPLE: &str = "#8b5cf6";
const SAND: &str = "#c8b99a";
const GREEN: &str = "#22c55e";
const AMBER: &str = "#f59e0b";

const fn node(
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    label: &'static str,
    detail: &'static str,
    accent: &'static str,
) -> Node {
    Node { x, y, w, h, label, detail, accent }
}

const fn edge(from: usize, to: usize, label: &'static str) -> Edge {
    Edge { from, to, label }
}

const REGISTRY_DIAGRAM: Diagram = Diagram {
    width: 880.0,
    height: 420.0,
    nodes: &[
        node(40.0, 60.0, 200.0, 80.0, "Developer", "Dockerfile + source", SAND),
        node(340.0, 60.0, 200.0, 80.0, "docker build", "one layer per instruction", BLUE),
        node(640.0, 60.0, 200.0, 80.0, "Registry", "Docker Hub / GHCR / ECR", PURPLE),
        node(640.0, 280.0, 200.0, 80.0, "Server cache", "docker pull", BLUE),
        node(340.0, 280.0, 200.0, 80.0, "Container", "docker run", GREEN),
    ],
    edges: &[
        edge(0, 1, "build"),
        edge(1, 2, "push"),
        edge(2, 3, "pull"),
        edge(3, 4, "run"),
    ],
};

const ENGINE_DIAGRAM: Diagram = Diagram {
    width: 880.0,
    height: 460.0,
    nodes: &[
        node(40.0, 40.0, 180.0, 70.0, "docker CLI", "HTTP over docker.sock", SAND),
        node(340.0, 40.0, 200.0, 70.0, "dockerd", "images, networks, volumes", BLUE),
        node(340.0, 170.0, 200.0, 70.0, "containerd", "pull, snapshots, lifecycle", PURPLE),
        node(640.0, 170.0, 200.0, 70.0, "shim", "one per container", PURPLE),
        node(640.0, 300.0, 200.0, 70.0, "runc", "OCI runtime", AMBER),
        node(340.0, 300.0, 200.0, 70.0, "Linux kernel", "namespaces + cgroups", GREEN),
    ],
    edges: &[
        edge(0, 1, "REST"),
        edge(1, 2, "gRPC"),
        edge(2, 3, "spawn"),
        edge(3, 4, "exec"),
        edge(4, 5, "clone()"),
    ],
};

const CONTAINERS_DIAGRAM: Diagram = Diagram {
    width: 880.0,
    height: 440.0,
    nodes: &[
        node(340.0, 30.0, 200.0, 60.0, "Writable layer", "per container", GREEN),
        node(340.0, 120.0, 200.0, 60.0, "App layer", "COPY . /app", SAND),
        node(340.0, 210.0, 200.0, 60.0, "Deps layer", "RUN npm ci", SAND),
        node(340.0, 300.0, 200.0, 60.0, "Base image", "FROM node:20-alpine", BLUE),
        node(640.0, 30.0, 200.0, 60.0, "Named volume", "survives docker rm", PURPLE),
        node(40.0, 30.0, 200.0, 60.0, "Bind mount", "host directory", AMBER),
    ],
    edges: &[
        edge(4, 0, "-v data:/data"),
        edge(5, 0, "-v $(pwd):/app"),
        edge(1, 0, ""),
        edge(2, 1, ""),
        edge(3, 2, ""),
    ],
};

const NETWORKING_DIAGRAM: Diagram = Diagram {
    width: 880.0,
    height: 440.0,
    nodes: &[
        node(40.0, 180.0, 160.0, 70.0, "Browser", "localhost:3000", SAND),
        node(280.0, 60.0, 180.0, 70.0, "frontend", ":3000", BLUE),
        node(280.0, 300.0, 180.0, 70.0, "backend", ":8080", BLUE),
        node(620.0, 300.0, 200.0, 70.0, "postgres", ":5432", PURPLE),
        node(620.0, 60.0, 200.0, 70.0, "app-net", "bridge + embedded DNS", GREEN),
    ],
    edges: &[
        edge(0, 1, "-p 3000:3000"),
        edge(1, 2, "http://backend:8080"),
        edge(2, 3, "postgres:5432"),
        edge(1, 4, "DNS"),
    ],
};

const COMPOSE_FILE: &str = r#"version: "3.9"

services:
  frontend:
    build: ./frontend
    ports:
      - "3000:3000"
    environment:
      - API_URL=http://backend:8080
    depends_on:
      - backend
    networks:
      - app-net

  backend:
    build: ./backend
    ports:
      - "8080:8080"
    environment:
      - DB_HOST=postgres
      - DB_PORT=5432
    depends_on:
      - postgres
    networks:
      - app-net

  postgres:
    image: postgres:15-alpine
    volumes:
      - pgdata:/var/lib/postgresql/data
    networks:
      - app-net

networks:
  app-net:

volumes:
  pgdata:
"#;

pub const SECTIONS: &[Section] = &[
    Section {
        id: "registry",
        num: "01",
        title: "Cloud & Registry",
        subtitle: "Where images are stored and distributed",
        what: "A Docker registry stores and distributes Docker images. Docker Hub is the default public registry. Private registries (ECR, GCR, ACR) are used for proprietary images. Every image is identified by name:tag, and underneath that is an immutable SHA256 digest.",
        analogy: "A registry is like GitHub, but for packaged app environments instead of code. docker pull is git clone. docker push is git push.",
        terms: &[
            Term { key: "Image Tag", value: "nginx:1.25-alpine. name:version, :latest if omitted." },
            Term { key: "Digest", value: "sha256:abc... immutable content hash. Tags can move; digests never change." },
            Term { key: "Repository", value: "All versions of one image (e.g. all nginx tags in one repo)." },
            Term { key: "docker pull", value: "Download image layers from registry to local cache." },
            Term { key: "docker push", value: "Upload local tagged image to registry." },
        ],
        commands: &[
            Command { cmd: "docker pull nginx:alpine", desc: "Pull from Docker Hub" },
            Command { cmd: "docker images", desc: "List all local cached images" },
            Command { cmd: "docker history nginx:alpine", desc: "Show each layer and its size" },
            Command { cmd: "docker tag app:latest myrepo/app:v1", desc: "Tag before pushing" },
            Command { cmd: "docker push myrepo/app:v1", desc: "Upload to registry" },
            Command { cmd: "docker login ghcr.io", desc: "Auth to private registry" },
        ],
        flow: &[
            "Developer writes Dockerfile describing the environment",
            "CI/CD runs: docker build -t org/app:v1 .",
            "Each Dockerfile instruction creates one immutable layer",
            "docker push org/app:v1 uploads layers to registry",
            "On a server: docker pull org/app:v1 downloads those layers",
            "docker run org/app:v1 starts a container from the cached image",
        ],
        compose: None,
        diagram: REGISTRY_DIAGRAM,
    },
    Section {
        id: "engine",
        num: "02",
        title: "Docker Engine",
        subtitle: "The daemon, runtime stack, and kernel integration",
        what: "Docker Engine is a client-server system. The CLI sends commands via HTTP to dockerd over a Unix socket. dockerd delegates container management to containerd, which uses runc, an OCI-compliant low-level runtime, to create isolated processes using Linux kernel namespaces and cgroups.",
        analogy: "dockerd is the manager taking orders. containerd is the site supervisor. runc is the worker who physically builds the isolation using Linux kernel tools.",
        terms: &[
            Term { key: "dockerd", value: "The background daemon. Manages container, image, network and volume lifecycle." },
            Term { key: "Unix Socket", value: "/var/run/docker.sock, the local IPC channel between CLI and daemon." },
            Term { key: "containerd", value: "Industry-standard runtime. Pulls images, manages snapshots and container lifecycle." },
            Term { key: "runc", value: "OCI runtime that calls clone() and unshare() to create isolated processes." },
            Term { key: "cgroups v2", value: "Kernel feature enforcing per-container CPU, memory and I/O limits." },
            Term { key: "namespaces", value: "Isolate PID tree, network stack, mounts and users per container." },
        ],
        commands: &[
            Command { cmd: "systemctl status docker", desc: "Check if dockerd is running" },
            Command { cmd: "docker system info", desc: "Runtime, OS, storage driver, cgroup version" },
            Command { cmd: "docker system df", desc: "Disk usage: images, containers, volumes" },
            Command { cmd: "docker system prune -a", desc: "Remove stopped containers and unused images" },
            Command { cmd: "docker build -t app:1.0 .", desc: "Build from Dockerfile in current dir" },
            Command { cmd: "docker events", desc: "Stream real-time daemon events" },
        ],
        flow: &[
            "docker run nginx: CLI serializes the request to JSON",
            "HTTP POST /containers/create sent to /var/run/docker.sock",
            "dockerd checks the local image cache and asks containerd to pull if missing",
            "containerd downloads layers and unpacks them via the OverlayFS snapshotter",
            "containerd launches a shim per container (survives dockerd restart)",
            "The shim calls runc, which calls clone() with namespace flags",
            "PID 1 (CMD/ENTRYPOINT) starts inside the isolated environment",
        ],
        compose: None,
        diagram: ENGINE_DIAGRAM,
    },
    Section {
        id: "containers",
        num: "03",
        title: "Containers & Filesystem",
        subtitle: "Isolated processes sharing the host kernel via layered filesystems",
        what: "A container is an isolated Linux process. It shares the host kernel but has its own PID namespace, network namespace, and a union-mounted filesystem built from read-only image layers plus one ephemeral writable layer. When the container is removed, the writable layer is deleted, so use volumes to persist data.",
        analogy: "An image is a class definition. A container is an instance created from it, with its own temporary state. Many containers share the same image layers without duplicating disk space.",
        terms: &[
            Term { key: "OverlayFS", value: "Union filesystem stacking read-only image layers under a writable container layer." },
            Term { key: "Writable Layer", value: "Thin layer unique to each container. Deleted on docker rm." },
            Term { key: "Named Volume", value: "Stored under /var/lib/docker/volumes. Survives docker rm." },
            Term { key: "Bind Mount", value: "-v /host/path:/container/path, a host directory visible inside the container." },
            Term { key: "CMD vs ENTRYPOINT", value: "CMD sets the default command (overridable). ENTRYPOINT sets the fixed executable." },
        ],
        commands: &[
            Command { cmd: "docker run -d -p 8080:80 --name web nginx", desc: "Background, port map, named" },
            Command { cmd: "docker run -it ubuntu bash", desc: "Interactive shell" },
            Command { cmd: "docker run --rm alpine echo hi", desc: "Auto-remove on exit" },
            Command { cmd: "docker exec -it web sh", desc: "Shell into running container" },
            Command { cmd: "docker logs -f web", desc: "Follow live stdout/stderr" },
            Command { cmd: "docker run -v mydata:/data app", desc: "Mount named volume" },
        ],
        flow: &[
            "docker run nginx: the daemon checks the local image cache",
            "OverlayFS mounts the read-only layers and adds a fresh writable layer",
            "A network namespace is created and a veth pair joins it to docker0",
            "cgroups apply memory, CPU and block I/O limits",
            "Volumes, bind mounts and tmpfs are attached",
            "docker stop sends SIGTERM to PID 1, then SIGKILL after the grace period",
            "docker rm deletes the writable layer",
        ],
        compose: None,
        diagram: CONTAINERS_DIAGRAM,
    },
    Section {
        id: "networking",
        num: "04",
        title: "Networks & Compose",
        subtitle: "Container discovery, DNS resolution, and multi-service orchestration",
        what: "Docker creates virtual networks for container communication. The default bridge connects containers by IP but has no DNS. User-defined networks add automatic DNS so containers find each other by name. Docker Compose declares services, networks and volumes in one YAML file and wires them together.",
        analogy: "A user-defined network is a private office LAN. Every container is a computer with a hostname (its service name). Publishing a port (-p) opens one firewall port for outside traffic.",
        terms: &[
            Term { key: "Bridge (default)", value: "docker0 switch. Containers get 172.17.x.x IPs. No DNS." },
            Term { key: "User-defined bridge", value: "docker network create, adds DNS so containers reach each other by name." },
            Term { key: "Host network", value: "--network host: the container uses the host NIC directly." },
            Term { key: "None network", value: "--network none: no networking at all." },
            Term { key: "depends_on", value: "Compose starts services in dependency order." },
        ],
        commands: &[
            Command { cmd: "docker network create app-net", desc: "Create user-defined bridge with DNS" },
            Command { cmd: "docker network ls", desc: "List all networks" },
            Command { cmd: "docker network inspect app-net", desc: "Subnet, gateway, connected containers" },
            Command { cmd: "docker compose up -d", desc: "Start all services in background" },
            Command { cmd: "docker compose down", desc: "Stop and remove containers + network" },
            Command { cmd: "docker compose logs -f backend", desc: "Follow logs for one service" },
        ],
        flow: &[
            "docker network create app-net: a bridge and embedded DNS server are created",
            "Container 'db' joins app-net and its DNS record is registered",
            "Container 'api' on the same network resolves 'db' automatically",
            "docker compose up reads docker-compose.yml",
            "Each service gets a DNS entry matching its service name",
            "docker compose down removes containers and network but keeps named volumes",
        ],
        compose: Some(COMPOSE_FILE),
        diagram: NETWORKING_DIAGRAM,
    },
];

pub const SUMMARY: &[SummaryRow] = &[
    SummaryRow { concept: "Image", what: "Read-only layered template", cmd: "docker build / docker pull", note: "Identified by tag and digest" },
    SummaryRow { concept: "Container", what: "Running isolated process from image", cmd: "docker run / docker start", note: "Writable layer lost on docker rm" },
    SummaryRow { concept: "Volume", what: "Persistent storage managed by Docker", cmd: "docker volume create", note: "Survives container removal" },
    SummaryRow { concept: "Network", what: "Virtual switch between containers", cmd: "docker network create", note: "User-defined adds DNS" },
    SummaryRow { concept: "Compose", what: "Multi-service app in one YAML file", cmd: "docker compose up", note: "Creates a shared default network" },
];

pub const WSL_TOPICS: &[(&str, &str)] = &[
    ("Installation", GREEN),
    ("Commands", BLUE),
    ("Docker with WSL2", PURPLE),
];

/// Section the header pills should highlight after an observer callback.
///
/// Entries are `(element id, is_intersecting)` in delivery order; the last
/// intersecting one that names a known section wins.
pub fn visible_section<'a>(entries: impl IntoIterator<Item = (&'a str, bool)>) -> Option<&'static str> {
    entries
        .into_iter()
        .filter(|&(_, hit)| hit)
        .filter_map(|(id, _)| SECTIONS.iter().find(|s| s.id == id).map(|s| s.id))
        .last()
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "▤",
        title: "Structured Learning",
        blurb: "Follow step-by-step guides from basics to advanced concepts.",
    },
    Feature {
        icon: "</>",
        title: "Practical Examples",
        blurb: "Learn by doing with real-world code examples and projects.",
    },
    Feature {
        icon: "✦",
        title: "Modern Tech",
        blurb: "Stay current with the latest tools and best practices.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn horizontal_edge_clips_to_box_sides() {
        let (start, end) = REGISTRY_DIAGRAM.edge_points(0).unwrap();
        assert!(approx(start.x, 240.0));
        assert!(approx(start.y, 100.0));
        assert!(approx(end.x, 340.0));
        assert!(approx(end.y, 100.0));
    }

    #[test]
    fn vertical_edge_clips_to_box_top_and_bottom() {
        let (start, end) = REGISTRY_DIAGRAM.edge_points(2).unwrap();
        assert!(approx(start.x, 740.0));
        assert!(approx(start.y, 140.0));
        assert!(approx(end.y, 280.0));
    }

    #[test]
    fn dangling_edges_are_skipped() {
        const BROKEN: Diagram = Diagram {
            width: 10.0,
            height: 10.0,
            nodes: &[node(0.0, 0.0, 1.0, 1.0, "a", "", SAND)],
            edges: &[edge(0, 3, "")],
        };
        assert!(BROKEN.edge_points(0).is_none());
        assert!(BROKEN.edge_points(5).is_none());
    }

    #[test]
    fn every_section_edge_resolves() {
        for s in SECTIONS {
            for i in 0..s.diagram.edges.len() {
                assert!(s.diagram.edge_points(i).is_some(), "{} edge {}", s.id, i);
            }
        }
    }

    #[test]
    fn compose_tab_only_when_present() {
        let tabs = Tab::available_for(&SECTIONS[0]);
        assert_eq!(tabs, vec![Tab::Concept, Tab::Commands, Tab::Flow]);
        let net = SECTIONS.iter().find(|s| s.id == "networking").unwrap();
        assert_eq!(Tab::available_for(net).last(), Some(&Tab::Compose));
    }

    #[test]
    fn view_box_from_size() {
        assert_eq!(ENGINE_DIAGRAM.view_box(), "0 0 880 460");
    }

    #[test]
    fn last_intersecting_section_wins() {
        assert_eq!(visible_section([("registry", true)]), Some("registry"));
        assert_eq!(
            visible_section([("registry", true), ("engine", true), ("containers", false)]),
            Some("engine")
        );
        assert_eq!(visible_section([("registry", false)]), None);
        assert_eq!(visible_section([("nav", true)]), None);
        assert_eq!(visible_section(std::iter::empty()), None);
    }

    #[test]
    fn home_features() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, ["Structured Learning", "Practical Examples", "Modern Tech"]);
        assert!(FEATURES.iter().all(|f| !f.blurb.is_empty()));
    }
}
